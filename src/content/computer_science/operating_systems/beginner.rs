//! Beginner operating systems topics.

use crate::domain::{CodeExample, Difficulty, Topic};

pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new("os-processes", "Processes", Difficulty::Beginner)
            .with_description(
                "A process is a running program together with everything the kernel \
                 tracks for it: an address space, open file descriptors, credentials \
                 and at least one thread of execution. Processes are isolated from each \
                 other unless they explicitly share memory or communicate.",
            )
            .with_key_points([
                "Each process has its own virtual address space",
                "fork() duplicates the caller; exec() replaces its image",
                "The parent reaps a finished child with wait(); until then it is a zombie",
                "Process states: new, ready, running, blocked, terminated",
            ])
            .with_tags(["os", "processes", "unix"])
            .with_example(
                CodeExample::new(
                    "fork and wait",
                    r#"#include <stdio.h>
#include <sys/wait.h>
#include <unistd.h>

int main(void) {
    pid_t pid = fork();
    if (pid == 0) {
        printf("child %d\n", getpid());
        return 0;
    }
    int status;
    waitpid(pid, &status, 0);
    printf("parent reaped %d\n", pid);
    return 0;
}
"#,
                )
                .with_language("c"),
            )
            .with_related(["os-threads", "os-system-calls", "os-scheduling"])
            .with_fun_fact("On Linux, PID 1 is special: if it exits, the kernel panics."),
        Topic::new("os-threads", "Threads", Difficulty::Beginner)
            .with_description(
                "Threads are independent streams of execution inside one process. They \
                 share the heap, globals and open files, but each has its own stack and \
                 registers. Sharing makes communication cheap and data races easy.",
            )
            .with_key_points([
                "Threads of one process share memory; processes do not",
                "Creating a thread is far cheaper than creating a process",
                "Shared mutable state needs synchronisation",
                "Kernel threads are scheduled by the OS; green threads by a runtime",
            ])
            .with_tags(["os", "threads", "concurrency"])
            .with_example(
                CodeExample::new(
                    "Spawning threads with scoped borrows",
                    r#"fn main() {
    let data = vec![1, 2, 3, 4];
    let (left, right) = data.split_at(2);
    std::thread::scope(|s| {
        let a = s.spawn(|| left.iter().sum::<i32>());
        let b = s.spawn(|| right.iter().sum::<i32>());
        println!("{}", a.join().unwrap() + b.join().unwrap());
    });
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["os-processes", "os-synchronization"]),
        Topic::new("os-system-calls", "System Calls", Difficulty::Beginner)
            .with_description(
                "A system call is the controlled doorway from user mode into the kernel. \
                 The program places a call number and arguments in registers and \
                 executes a trap instruction; the kernel validates the request, performs \
                 it with full privileges and returns a result.",
            )
            .with_key_points([
                "User code cannot touch hardware directly; it asks the kernel",
                "Each crossing costs a mode switch, so batching matters",
                "libc wrappers like read() and write() hide the raw syscall",
                "strace shows every syscall a process makes",
            ])
            .with_tags(["os", "kernel", "syscalls"])
            .with_example(
                CodeExample::new(
                    "Tracing the syscalls of a command",
                    r#"$ strace -c ls > /dev/null
% time     seconds  usecs/call     calls    errors syscall
------ ----------- ----------- --------- --------- ----------------
 25.00    0.000040           4        10           mmap
 18.75    0.000030           5         6           openat
 ...
"#,
                )
                .with_language("text"),
            )
            .with_related(["os-processes", "os-io-uring"])
            .with_fun_fact("Linux on x86-64 has more than 350 system calls; the first, read, is number 0."),
    ]
}
