//! User store benchmarks.
//!
//! Run with: `cargo bench -p users_directory`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tokio::runtime::Runtime;

use users_directory::contract::model::NewUser;
use users_directory::domain::repo::UsersRepository;
use users_directory::infra::storage::memory::InMemoryUsersRepository;

fn bench_insert(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let repo = InMemoryUsersRepository::new();

    c.bench_function("store_insert", |b| {
        b.iter(|| {
            rt.block_on(async {
                let user = repo
                    .insert(NewUser {
                        username: "bench".to_string(),
                        email: "bench@example.com".to_string(),
                    })
                    .await
                    .unwrap();
                black_box(user);
            });
        });
    });
}

fn bench_find_by_id(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let repo = InMemoryUsersRepository::new();

    let id = rt
        .block_on(repo.insert(NewUser {
            username: "bench".to_string(),
            email: "bench@example.com".to_string(),
        }))
        .unwrap()
        .id;

    c.bench_function("store_find_by_id", |b| {
        b.iter(|| {
            rt.block_on(async {
                let user = repo.find_by_id(black_box(id)).await.unwrap();
                black_box(user);
            });
        });
    });
}

fn bench_list(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let repo = InMemoryUsersRepository::new();

    for n in 0..100 {
        rt.block_on(repo.insert(NewUser {
            username: format!("bench{n}"),
            email: format!("bench{n}@example.com"),
        }))
        .unwrap();
    }

    c.bench_function("store_list_100", |b| {
        b.iter(|| {
            rt.block_on(async {
                let users = repo.list().await.unwrap();
                black_box(users);
            });
        });
    });
}

criterion_group!(benches, bench_insert, bench_find_by_id, bench_list);
criterion_main!(benches);
