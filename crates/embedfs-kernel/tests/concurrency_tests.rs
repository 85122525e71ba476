//! Concurrent first access to embedded assets.

use std::sync::{Arc, Barrier};

use embedfs_kernel::{EmbeddedFs, Filesystem};
use embedfs_testutil::FixtureTable;

const OPENERS: usize = 128;

fn big_payload() -> Vec<u8> {
    (0..512 * 1024u32).map(|i| (i % 251) as u8).collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_opens_decode_once() {
    let data = big_payload();
    let table = FixtureTable::new().file("/big.bin", &data).build().unwrap();
    let fs = Arc::new(EmbeddedFs::new(Arc::clone(&table)));
    let barrier = Arc::new(Barrier::new(OPENERS));

    let mut tasks = Vec::with_capacity(OPENERS);
    for _ in 0..OPENERS {
        let fs = Arc::clone(&fs);
        let barrier = Arc::clone(&barrier);
        tasks.push(tokio::task::spawn_blocking(move || {
            barrier.wait();
            let mut handle = fs.open("/big.bin").unwrap();
            let bytes = handle.read_all().unwrap();
            (bytes, fs.read("/big.bin").unwrap())
        }));
    }

    let mut shared = Vec::with_capacity(OPENERS);
    for task in tasks {
        let (bytes, buffer) = task.await.unwrap();
        assert!(bytes == data, "reader saw different content");
        shared.push(buffer);
    }

    let record = table.lookup("/big.bin").unwrap();
    assert_eq!(record.decode_attempts(), 1);
    assert!(shared.iter().all(|b| Arc::ptr_eq(b, &shared[0])));
}

#[test]
fn different_records_decode_independently() {
    let mut fixture = FixtureTable::new();
    for i in 0..16 {
        fixture = fixture.file(&format!("/f{i}.txt"), format!("file number {i}"));
    }
    let table = fixture.build().unwrap();
    let fs = EmbeddedFs::new(Arc::clone(&table));

    std::thread::scope(|s| {
        for t in 0..8 {
            let fs = &fs;
            s.spawn(move || {
                for i in 0..16 {
                    let path = format!("/f{}.txt", (i + t) % 16);
                    let n = (i + t) % 16;
                    assert_eq!(&*fs.read(&path).unwrap(), format!("file number {n}").as_bytes());
                }
            });
        }
    });

    for i in 0..16 {
        let record = table.lookup(&format!("/f{i}.txt")).unwrap();
        assert_eq!(record.decode_attempts(), 1);
        assert!(record.is_materialized());
    }
}

#[test]
fn concurrent_failures_decode_once() {
    let table = FixtureTable::new().raw("/bad", 64, "not*base64").build().unwrap();
    let fs = EmbeddedFs::new(Arc::clone(&table));
    let barrier = Barrier::new(32);

    std::thread::scope(|s| {
        for _ in 0..32 {
            s.spawn(|| {
                barrier.wait();
                assert!(fs.open("/bad").is_err());
            });
        }
    });

    assert_eq!(table.lookup("/bad").unwrap().decode_attempts(), 1);
}
