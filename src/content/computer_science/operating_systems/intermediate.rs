use crate::domain::{CodeExample, Difficulty, Topic};

pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new("os-scheduling", "CPU Scheduling", Difficulty::Intermediate)
            .with_description(
                "The scheduler decides which runnable thread gets a CPU and for how long. \
                 Policies balance throughput, latency and fairness; preemptive schedulers \
                 interrupt a running thread when its time slice ends.",
            )
            .with_key_points([
                "FCFS is simple but suffers from the convoy effect",
                "Round robin bounds wait time with a fixed quantum",
                "Multilevel feedback queues favour interactive work",
                "Linux CFS orders threads by virtual runtime in a red-black tree",
            ])
            .with_tags(["os", "scheduling", "cpu"])
            .with_example(
                CodeExample::new(
                    "Round robin simulation",
                    r#"use std::collections::VecDeque;

fn round_robin(mut jobs: VecDeque<(char, u32)>, quantum: u32) -> Vec<char> {
    let mut order = Vec::new();
    while let Some((name, left)) = jobs.pop_front() {
        order.push(name);
        if left > quantum {
            jobs.push_back((name, left - quantum));
        }
    }
    order
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["os-processes", "os-threads", "ds-balanced-trees"]),
        Topic::new("os-virtual-memory", "Virtual Memory and Paging", Difficulty::Intermediate)
            .with_description(
                "Virtual memory gives every process the illusion of a large private \
                 address space. The MMU translates virtual pages to physical frames \
                 through page tables; pages not in RAM trigger a page fault that the \
                 kernel resolves by loading them.",
            )
            .with_key_points([
                "Pages are typically 4 KiB; huge pages reduce TLB pressure",
                "The TLB caches recent translations",
                "x86-64 uses a four- or five-level page table tree",
                "Copy-on-write makes fork() cheap",
            ])
            .with_tags(["os", "memory", "paging"])
            .with_example(
                CodeExample::new(
                    "Splitting a virtual address",
                    r#"const PAGE_SHIFT: u64 = 12;

fn split(vaddr: u64) -> (u64, u64) {
    let page = vaddr >> PAGE_SHIFT;
    let offset = vaddr & ((1 << PAGE_SHIFT) - 1);
    (page, offset)
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["os-page-replacement", "os-processes"])
            .with_fun_fact("The Atlas computer at Manchester introduced paged virtual memory in 1962."),
        Topic::new("os-synchronization", "Locks and Synchronisation", Difficulty::Intermediate)
            .with_description(
                "When threads share mutable data, operations must be made atomic with \
                 respect to each other. Mutexes, condition variables, semaphores and \
                 atomic instructions are the building blocks; choosing the wrong one \
                 costs either correctness or throughput.",
            )
            .with_key_points([
                "A critical section must run with mutual exclusion",
                "Condition variables wait for a predicate; always re-check it in a loop",
                "Spinlocks suit very short sections on multicore machines",
                "Lock ordering prevents most deadlocks",
            ])
            .with_tags(["os", "concurrency", "locks"])
            .with_example(
                CodeExample::new(
                    "Shared counter behind a mutex",
                    r#"use std::sync::{Arc, Mutex};
use std::thread;

fn main() {
    let counter = Arc::new(Mutex::new(0));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let c = Arc::clone(&counter);
            thread::spawn(move || *c.lock().unwrap() += 1)
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(*counter.lock().unwrap(), 8);
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["os-threads", "os-deadlocks"]),
    ]
}
