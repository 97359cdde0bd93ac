use crate::domain::{CodeExample, Difficulty, Topic};

pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new("ds-b-trees", "B-Trees", Difficulty::Advanced)
            .with_description(
                "A B-tree is a balanced search tree whose nodes hold many keys, sized to \
                 a disk page or cache line. High fan-out keeps the tree shallow, so a \
                 lookup touches only a handful of pages. Most relational databases index \
                 with B+ trees, which keep values in the leaves and link them together.",
            )
            .with_key_points([
                "Every node except the root is at least half full",
                "Splits propagate upward; the tree grows at the root",
                "B+ trees chain leaves for fast range scans",
                "Fan-out in the hundreds means three or four levels cover billions of keys",
            ])
            .with_tags(["data-structures", "trees", "databases", "storage"])
            .with_example(
                CodeExample::new(
                    "Inspecting a B-tree index in PostgreSQL",
                    r#"CREATE EXTENSION pageinspect;
CREATE INDEX orders_created_idx ON orders (created_at);

SELECT level, fastroot, root
FROM bt_metap('orders_created_idx');
"#,
                )
                .with_language("sql"),
            )
            .with_related(["ds-balanced-trees", "ds-lsm-trees"])
            .with_fun_fact("Bayer and McCreight never said what the B stands for."),
        Topic::new("ds-lsm-trees", "Log-Structured Merge Trees", Difficulty::Advanced)
            .with_description(
                "An LSM tree turns random writes into sequential ones. Writes go to an \
                 in-memory table; when it fills it is flushed as an immutable sorted \
                 file, and background compaction merges files level by level. Reads \
                 check the memtable first, then files from newest to oldest.",
            )
            .with_key_points([
                "Write-ahead log makes the memtable durable",
                "Compaction trades write amplification for read performance",
                "Tombstones mark deletions until compaction drops them",
                "Per-file Bloom filters skip files that cannot hold a key",
            ])
            .with_tags(["data-structures", "storage", "databases", "write-optimized"])
            .with_example(
                CodeExample::new(
                    "Read path across sorted runs",
                    r#"use std::collections::BTreeMap;

struct Lsm {
    memtable: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
    runs: Vec<BTreeMap<Vec<u8>, Option<Vec<u8>>>>, // newest first
}

impl Lsm {
    fn get(&self, key: &[u8]) -> Option<&[u8]> {
        std::iter::once(&self.memtable)
            .chain(self.runs.iter())
            .find_map(|table| table.get(key))
            .and_then(|v| v.as_deref())
    }
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["ds-b-trees", "ds-bloom-filters", "ms-event-sourcing"]),
        Topic::new("ds-bloom-filters", "Bloom Filters", Difficulty::Advanced)
            .with_description(
                "A Bloom filter is a bit array with k hash functions that answers \
                 \"definitely not present\" or \"possibly present\". It never gives \
                 false negatives, and its false-positive rate is tuned by the number of \
                 bits per element.",
            )
            .with_key_points([
                "Insert sets k bits; query checks that all k are set",
                "About 10 bits per element gives roughly a 1% false-positive rate",
                "Standard filters cannot delete; counting filters can",
                "Optimal k is (m / n) ln 2",
            ])
            .with_tags(["data-structures", "probabilistic", "hashing"])
            .with_example(
                CodeExample::new(
                    "Double hashing to derive k indexes",
                    r#"fn indexes(h1: u64, h2: u64, k: u32, m: u64) -> impl Iterator<Item = u64> {
    (0..k as u64).map(move |i| h1.wrapping_add(i.wrapping_mul(h2)) % m)
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["ds-hash-tables", "ds-lsm-trees"])
            .with_fun_fact("Burton Howard Bloom described the structure in 1970 for hyphenation dictionaries."),
    ]
}
