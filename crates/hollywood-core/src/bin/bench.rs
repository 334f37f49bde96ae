use hollywood_core::{GraphParams, GraphStore};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use sysinfo::{Pid, System};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let actors: usize = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(50_000);
    let movies: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let per_actor: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(5);
    let queries: usize = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(10);
    println!(
        "benchmark: actors={}, movies={}, per_actor={}, queries={}",
        actors, movies, per_actor, queries
    );

    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = GraphStore::with_params(GraphParams::from_env())?;
    let start = Instant::now();
    for i in 0..actors {
        let k = rng.gen_range(1..=per_actor.max(1));
        let titles: Vec<String> = (0..k)
            .map(|_| format!("movie-{}", rng.gen_range(0..movies.max(1))))
            .collect();
        graph.insert_record(&format!("actor-{i}"), &titles);
    }
    let insert_ms = start.elapsed().as_millis();
    println!(
        "inserted {} records in {} ms ({} vertices, {} edges, capacity {})",
        actors,
        insert_ms,
        graph.vertex_count(),
        graph.edge_count(),
        graph.capacity()
    );

    let search_start = Instant::now();
    let mut reached = 0;
    for _ in 0..queries {
        let source = format!("actor-{}", rng.gen_range(0..actors.max(1)));
        reached += graph.actor_numbers(&source).len();
    }
    let search_ms = search_start.elapsed().as_millis();
    println!(
        "{} traversals: {} ms (avg {} ms, avg reach {})",
        queries,
        search_ms,
        search_ms / queries.max(1) as u128,
        reached / queries.max(1)
    );

    // memory snapshot
    let mut sys = System::new_all();
    let pid = Pid::from_u32(std::process::id());
    sys.refresh_process(pid);
    if let Some(p) = sys.process(pid) {
        let rss_mb = p.memory() as f64 / 1024.0 / 1024.0;
        println!("resident set: {:.2} MB", rss_mb);
    }

    Ok(())
}
