use streak_cli::{run_bench, run_demo, BenchOptions, DemoOptions};

#[test]
fn demo_seed_matrix() {
    for seed in [1, 10, 42, 9001] {
        let opts = DemoOptions {
            size: 30,
            seed,
            json: false,
        };
        let mut first = Vec::new();
        let mut second = Vec::new();
        let a = run_demo(&opts, &mut first).unwrap();
        let b = run_demo(&opts, &mut second).unwrap();
        assert_eq!(a, b);
        assert_eq!(first, second);
    }
}

#[test]
fn bench_small_matrix() {
    let report = run_bench(&BenchOptions { base: 64, steps: 2 });
    assert_eq!(report.insert.len(), 2);
    assert_eq!(report.remove.len(), 2);
    assert_eq!(report.insert[1].n, 128);
    assert!(report.insert[1].expected > 2.0);
}
