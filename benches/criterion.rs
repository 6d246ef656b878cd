use std::path::Path;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use steam_simple::{library::scan_library, profiles::parse_profiles};

fn get_login_users_vdf(users: usize) -> String {
    let blocks: String = (0..users)
        .map(|i| {
            format!(
                "\t\"{}\"\n\t{{\n\t\t\"AccountName\"\t\t\"account_{i}\"\n\t\t\"PersonaName\"\t\t\"Persona {i}\"\n\t\t\"MostRecent\"\t\t\"0\"\n\t}}\n",
                76561198000000000u64 + i as u64
            )
        })
        .collect();

    format!("\"users\"\n{{\n{blocks}}}\n")
}

fn create_library(root: &Path, games: usize) {
    for i in 0..games {
        let path_bin = root.join(format!("Game {i}/data/bin"));
        std::fs::create_dir_all(&path_bin).unwrap();
        for j in 0..20 {
            std::fs::write(path_bin.join(format!("asset_{j}.pak")), "").unwrap();
        }
        std::fs::write(path_bin.join("game.exe"), "").unwrap();
    }
}

fn profiles_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("profiles");

    for users in [1, 10, 100] {
        let content = get_login_users_vdf(users);
        group.bench_function(format!("parse_profiles - {users} users"), |b| {
            b.iter(|| parse_profiles(black_box(&content)))
        });
    }

    group.finish();
}

fn library_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("library");

    for games in [10, 50] {
        let dir = tempfile::tempdir().unwrap();
        create_library(dir.path(), games);

        group.bench_function(format!("scan_library - {games} games"), |b| {
            b.iter(|| scan_library(black_box(dir.path())))
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = profiles_benchmark, library_benchmark
}
criterion_main!(benches);
