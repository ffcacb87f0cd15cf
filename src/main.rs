//! fairq demo binary

use anyhow::Result;
use fairq::{FairPriorityQueue, QueueConfig, StopWatch};
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("fairq v0.1.0 — fairness-scheduled work queue demo\n");

    let config = QueueConfig::new(3, 2);
    println!("Config: {}", serde_json::to_string(&config)?);

    let queue: Arc<FairPriorityQueue<String>> = Arc::new(FairPriorityQueue::with_config(&config)?);

    // Producers: one per fairness level, staggered rates
    let mut producers: Vec<JoinHandle<()>> = vec![];
    for level in 1..=config.num_levels {
        let queue: Arc<FairPriorityQueue<String>> = Arc::clone(&queue);
        producers.push(thread::spawn(move || {
            for i in 0..20 {
                queue.add(format!("L{level}-{i:02}"), level).unwrap();
                thread::sleep(Duration::from_millis(2 * level as u64));
            }
        }));
    }

    // One out-of-band control item on the bypass level
    queue.add("CONTROL".to_string(), 0)?;

    // Consumers: drain by fairness until closed
    let mut consumers: Vec<JoinHandle<usize>> = vec![];
    for worker in 0..2 {
        let queue: Arc<FairPriorityQueue<String>> = Arc::clone(&queue);
        consumers.push(thread::spawn(move || {
            let mut served: usize = 0;
            while let Some(item) = queue.remove_wait() {
                log::info!("worker {worker} served {item}");
                served += 1;
            }
            served
        }));
    }

    let mut sw = StopWatch::new();
    sw.start();

    for handle in producers {
        handle.join().unwrap();
    }

    // Producers are done; wait for the fairness levels to drain, then
    // release the consumers
    while queue.len() > 1 {
        thread::sleep(Duration::from_millis(1));
    }
    queue.close();

    let mut total: usize = 0;
    for handle in consumers {
        total += handle.join().unwrap();
    }

    sw.stop();

    // The bypass item is untouched by the workers
    let control: Option<String> = queue.remove_level(0)?;

    println!("\nDrained {total} items in {:?}", sw.elapsed());
    println!("Bypass item recovered: {:?}", control);

    Ok(())
}
