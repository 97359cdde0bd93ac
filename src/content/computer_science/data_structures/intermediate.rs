use crate::domain::{CodeExample, Difficulty, Topic};

pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new("ds-binary-heaps", "Binary Heaps and Priority Queues", Difficulty::Intermediate)
            .with_description(
                "A binary heap is a complete binary tree stored in an array where every \
                 parent is ordered before its children. It gives O(1) access to the \
                 minimum or maximum and O(log n) insertion and removal.",
            )
            .with_key_points([
                "Children of index i live at 2i+1 and 2i+2",
                "Push sifts up; pop swaps the last element to the root and sifts down",
                "Building a heap from n items takes O(n), not O(n log n)",
                "Used by Dijkstra's algorithm, schedulers and top-k queries",
            ])
            .with_tags(["data-structures", "heaps", "priority-queue"])
            .with_example(
                CodeExample::new(
                    "Min-heap with Reverse",
                    r#"use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn k_smallest(items: &[u32], k: usize) -> Vec<u32> {
    let mut heap: BinaryHeap<Reverse<u32>> = items.iter().copied().map(Reverse).collect();
    (0..k).filter_map(|_| heap.pop().map(|Reverse(x)| x)).collect()
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["ds-arrays", "os-scheduling"]),
        Topic::new("ds-balanced-trees", "Balanced Binary Search Trees", Difficulty::Intermediate)
            .with_description(
                "A binary search tree keeps keys ordered, but inserting sorted input \
                 degrades it into a list. Balanced variants such as AVL and red-black \
                 trees rotate nodes on insert and delete to keep height O(log n).",
            )
            .with_key_points([
                "AVL trees keep subtree heights within one of each other",
                "Red-black trees allow more imbalance but rotate less",
                "In-order traversal yields keys in sorted order",
                "Range queries are natural on ordered trees, unlike hash tables",
            ])
            .with_tags(["data-structures", "trees", "ordered"])
            .with_example(
                CodeExample::new(
                    "Range query on an ordered map",
                    r#"use std::collections::BTreeMap;

fn main() {
    let mut prices = BTreeMap::new();
    prices.insert(10, "apple");
    prices.insert(25, "melon");
    prices.insert(40, "mango");
    for (price, fruit) in prices.range(20..50) {
        println!("{fruit}: {price}");
    }
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["ds-b-trees", "os-scheduling"])
            .with_fun_fact("The AVL tree, published in 1962 by Adelson-Velsky and Landis, was the first self-balancing BST."),
    ]
}
