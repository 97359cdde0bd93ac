use crate::domain::{CodeExample, Difficulty, Topic};

pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new("ds-arrays", "Arrays and Dynamic Arrays", Difficulty::Beginner)
            .with_description(
                "An array stores elements contiguously, so any index is reachable in \
                 constant time and sequential scans are cache friendly. A dynamic array \
                 such as Vec grows by reallocating to a larger buffer, which keeps \
                 appends amortised O(1).",
            )
            .with_key_points([
                "Index access is O(1); insertion in the middle is O(n)",
                "Growth by a constant factor gives amortised O(1) push",
                "Contiguity makes arrays the fastest structure to iterate",
                "Reallocation invalidates pointers into the old buffer",
            ])
            .with_tags(["data-structures", "arrays", "memory"])
            .with_example(
                CodeExample::new(
                    "Watching a Vec grow",
                    r#"fn main() {
    let mut v = Vec::new();
    let mut last = v.capacity();
    for i in 0..100 {
        v.push(i);
        if v.capacity() != last {
            println!("len {} -> capacity {}", v.len(), v.capacity());
            last = v.capacity();
        }
    }
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["ds-linked-lists", "ds-binary-heaps"]),
        Topic::new("ds-linked-lists", "Linked Lists", Difficulty::Beginner)
            .with_description(
                "A linked list chains nodes through pointers. Inserting or removing a \
                 node you already hold is O(1), but reaching the n-th element takes n \
                 hops, and scattered nodes make poor use of CPU caches.",
            )
            .with_key_points([
                "Singly linked: next pointer only; doubly linked: next and prev",
                "O(1) splice at a known position",
                "O(n) random access",
                "Intrusive lists embed the links inside the element itself",
            ])
            .with_tags(["data-structures", "lists", "pointers"])
            .with_example(
                CodeExample::new(
                    "Singly linked stack",
                    r#"struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

struct Stack<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> Stack<T> {
    fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            node.value
        })
    }
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["ds-arrays", "os-page-replacement"])
            .with_fun_fact("Linked lists were invented in 1955–56 for the Information Processing Language at RAND."),
        Topic::new("ds-hash-tables", "Hash Tables", Difficulty::Beginner)
            .with_description(
                "A hash table maps keys to slots with a hash function, giving expected \
                 O(1) lookup, insertion and deletion. Collisions are resolved by chaining \
                 entries in buckets or by probing for another free slot.",
            )
            .with_key_points([
                "Load factor = entries / slots; resize before it gets too high",
                "Open addressing keeps entries inline and is cache friendly",
                "A weak hash lets attackers force every key into one bucket",
                "Rust's HashMap uses SipHash by default to resist that",
            ])
            .with_tags(["data-structures", "hashing", "maps"])
            .with_example(
                CodeExample::new(
                    "Counting words",
                    r#"use std::collections::HashMap;

fn word_counts(text: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["ds-bloom-filters", "ds-arrays"]),
    ]
}
