use crate::domain::{CodeExample, Difficulty, Topic};

pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new("os-page-replacement", "Page Replacement Algorithms", Difficulty::Advanced)
            .with_description(
                "When physical memory is full, the kernel must evict a page to make room. \
                 The optimal policy evicts the page used furthest in the future, which is \
                 unknowable; real systems approximate LRU with reference bits.",
            )
            .with_key_points([
                "FIFO can get worse with more frames (Belady's anomaly)",
                "LRU is a stack algorithm and never shows the anomaly",
                "The clock algorithm approximates LRU with one reference bit per page",
                "Thrashing happens when the working set exceeds available frames",
            ])
            .with_tags(["os", "memory", "caching", "algorithms"])
            .with_example(
                CodeExample::new(
                    "Counting faults under FIFO",
                    r#"use std::collections::VecDeque;

fn fifo_faults(refs: &[u32], frames: usize) -> usize {
    let mut mem: VecDeque<u32> = VecDeque::new();
    let mut faults = 0;
    for &page in refs {
        if !mem.contains(&page) {
            faults += 1;
            if mem.len() == frames {
                mem.pop_front();
            }
            mem.push_back(page);
        }
    }
    faults
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["os-virtual-memory", "ds-linked-lists"])
            .with_fun_fact(
                "Laszlo Belady found his anomaly in 1969: the reference string \
                 1,2,3,4,1,2,5,1,2,3,4,5 faults 9 times with 3 frames and 10 times with 4.",
            ),
        Topic::new("os-deadlocks", "Deadlocks", Difficulty::Advanced)
            .with_description(
                "A deadlock is a set of threads each waiting for a resource held by \
                 another thread in the set. It requires four conditions at once; \
                 breaking any one of them prevents it.",
            )
            .with_key_points([
                "Coffman conditions: mutual exclusion, hold and wait, no preemption, circular wait",
                "Global lock ordering breaks circular wait",
                "Banker's algorithm avoids unsafe states but needs maximum claims up front",
                "Detection builds a wait-for graph and looks for cycles",
            ])
            .with_tags(["os", "concurrency", "deadlock"])
            .with_example(
                CodeExample::new(
                    "Two locks taken in opposite order",
                    r#"// Thread 1              // Thread 2
lock(a);                   lock(b);
lock(b);  // waits for 2   lock(a);  // waits for 1
"#,
                )
                .with_language("c"),
            )
            .with_related(["os-synchronization"]),
        Topic::new("os-io-uring", "Asynchronous I/O with io_uring", Difficulty::Advanced)
            .with_description(
                "io_uring is a Linux interface built on two ring buffers shared between \
                 user space and the kernel: a submission queue and a completion queue. \
                 Programs batch many I/O requests per system call, or none at all with \
                 kernel-side polling.",
            )
            .with_key_points([
                "Submission and completion rings live in memory mapped by both sides",
                "Requests carry user data so completions can arrive out of order",
                "Registered buffers and files skip per-request setup",
                "SQPOLL mode lets a kernel thread consume submissions without syscalls",
            ])
            .with_tags(["os", "io", "linux", "async"])
            .with_example(
                CodeExample::new(
                    "Reading a file with liburing",
                    r#"struct io_uring ring;
io_uring_queue_init(8, &ring, 0);

struct io_uring_sqe *sqe = io_uring_get_sqe(&ring);
io_uring_prep_read(sqe, fd, buf, sizeof(buf), 0);
io_uring_submit(&ring);

struct io_uring_cqe *cqe;
io_uring_wait_cqe(&ring, &cqe);
printf("read %d bytes\n", cqe->res);
io_uring_cqe_seen(&ring, cqe);
"#,
                )
                .with_language("c"),
            )
            .with_related(["os-system-calls"])
            .with_fun_fact("io_uring was merged into Linux 5.1 in 2019, written by Jens Axboe."),
    ]
}
