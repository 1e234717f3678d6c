//! Load testing: concurrent clients against `/rolldice` and the store.

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde_json::Value;
use traced_crud::config::ResourceKind;

mod common;

#[tokio::test]
async fn test_concurrent_rolldice() {
    let service = common::start_service(ResourceKind::Users).await;

    // 10 virtual users hitting the same endpoint
    let concurrency = 10;
    let requests_per_task = 30;
    let url = service.url("/rolldice?rolls=3");

    let start = Instant::now();
    let mut handles = Vec::new();
    for _ in 0..concurrency {
        let client = service.client.clone();
        let url = url.clone();
        handles.push(tokio::spawn(async move {
            let mut ok = 0;
            for _ in 0..requests_per_task {
                let res = client.get(&url).send().await.unwrap();
                if res.status() == StatusCode::OK {
                    let rolls: Vec<i64> = res.json().await.unwrap();
                    assert_eq!(rolls.len(), 3);
                    ok += 1;
                }
            }
            ok
        }));
    }

    let mut total_ok = 0;
    for handle in handles {
        total_ok += handle.await.unwrap();
    }
    let elapsed = start.elapsed();

    println!(
        "{} requests in {:?} ({:.0} req/s)",
        total_ok,
        elapsed,
        total_ok as f64 / elapsed.as_secs_f64()
    );
    assert_eq!(total_ok, concurrency * requests_per_task);
    assert!(elapsed < Duration::from_secs(30));
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let service = common::start_service(ResourceKind::Users).await;

    let concurrency = 10;
    let creates_per_task = 10;

    let mut handles = Vec::new();
    for task in 0..concurrency {
        let client = service.client.clone();
        let url = service.url("/users");
        handles.push(tokio::spawn(async move {
            let mut ids = Vec::new();
            for i in 0..creates_per_task {
                let user: Value = client
                    .post(format!("{}?name=t{}&surname=n{}", url, task, i))
                    .send()
                    .await
                    .unwrap()
                    .json()
                    .await
                    .unwrap();
                ids.push(user["id"].as_u64().unwrap());
            }
            ids
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.extend(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), concurrency * creates_per_task);
    assert_eq!(ids.first(), Some(&4));
    assert_eq!(ids.last(), Some(&(3 + (concurrency * creates_per_task) as u64)));
}
