use corral::prelude::*;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let queue: Arc<SyncQueue<String>> = Arc::new(SyncQueue::new());

    let thread_count = 4;
    let mut threads = vec![];

    for thread_no in 0..thread_count {
        let queue = queue.clone();

        let t = std::thread::Builder::new()
            .name(format!("t_{}", thread_no))
            .spawn(move || {
                for job in 0..3 {
                    queue.offer(format!("job_{}_{}", thread_no, job));
                }
            })?;

        threads.push(t);
    }

    for t in threads.into_iter() {
        t.join()
            .map_err(|_| anyhow::anyhow!("producer thread panicked"))?;
    }

    println!("{}", queue);
    println!("next up: {}", queue.peek()?);

    while let Some(job) = queue.poll() {
        println!("done: {}", job);
    }

    // Popping an empty queue is an error, not a wait.
    if let Err(e) = queue.pop() {
        println!("{}", e);
    }

    Ok(())
}
