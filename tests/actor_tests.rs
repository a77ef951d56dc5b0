use rocket_landing::adapters::inbound::InMemoryEventStore;
use rocket_landing::adapters::outbound::init_noop_logger;
use rocket_landing::application::LandingService;
use rocket_landing::common::{AggregateRoot, EventStore};
use rocket_landing::domains::landing::*;
use rocket_landing::domains::logger::DomainLogger;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

struct BridgeCapture {
    messages: Mutex<Vec<String>>,
}

impl BridgeCapture {
    fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }
}

impl DomainLogger for BridgeCapture {
    fn info(&self, msg: &str) {
        self.messages.lock().unwrap().push(format!("INFO:{}", msg));
    }
    fn warn(&self, msg: &str) {
        self.messages.lock().unwrap().push(format!("WARN:{}", msg));
    }
    fn error(&self, msg: &str) {
        self.messages.lock().unwrap().push(format!("ERR:{}", msg));
    }
}

fn platform() -> Platform {
    Platform::new(5, 5, 10, 10, 100, 100).unwrap()
}

#[tokio::test]
async fn test_concurrent_checks_for_one_cell_admit_exactly_one_rocket() {
    let (tx, mut rx) = mpsc::channel(1024);
    let actor = LandingCommandActor::new(platform(), tx);
    let drain = tokio::spawn(async move { while rx.recv().await.is_some() {} });

    let mut handles = Vec::new();
    for _ in 0..32 {
        let actor = actor.clone();
        handles.push(tokio::spawn(async move {
            actor.check_for_landing(RocketId::new(), 9, 9).await.unwrap()
        }));
    }

    let mut ok = 0;
    for handle in handles {
        match handle.await.unwrap() {
            LandingOutcome::OkForLanding => ok += 1,
            LandingOutcome::Clash => {}
            other => panic!("unexpected outcome {:?}", other),
        }
    }
    assert_eq!(ok, 1);

    let snapshot = actor.snapshot().await;
    assert_eq!(snapshot.held_positions().len(), 1);
    assert_eq!(snapshot.reserved_cells().len(), 9);

    drop(actor);
    drain.await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_moves_keep_reservations_consistent() {
    let (tx, mut rx) = mpsc::channel(4096);
    let actor = LandingCommandActor::new(platform(), tx);
    let drain = tokio::spawn(async move { while rx.recv().await.is_some() {} });

    let mut handles = Vec::new();
    for r in 0..8 {
        let actor = actor.clone();
        handles.push(tokio::spawn(async move {
            let rocket = RocketId::new();
            for step in 0..50 {
                let x = 5 + (r * 3 + step) % 10;
                let y = 5 + (r * 7 + step * 3) % 10;
                actor.check_for_landing(rocket, x, y).await.unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = actor.snapshot().await;
    let bounds = *snapshot.platform_bounds();
    let mut expected = std::collections::HashMap::new();
    for position in snapshot.held_positions().values() {
        for cell in position.footprint() {
            if bounds.contains(cell) {
                *expected.entry(cell).or_insert(0u32) += 1;
            }
        }
    }
    assert_eq!(*snapshot.reserved_cells(), expected);

    let held: Vec<Coordinates> = snapshot.held_positions().values().copied().collect();
    for (i, a) in held.iter().enumerate() {
        for b in &held[i + 1..] {
            assert!((a.x - b.x).abs() > 1 || (a.y - b.y).abs() > 1);
        }
    }

    drop(actor);
    drain.await.unwrap();
}

#[tokio::test]
async fn test_events_reach_store_and_projection() {
    let (tx, rx) = mpsc::channel(100);
    let store = Arc::new(InMemoryEventStore::new());
    let event_actor = LandingEventActor::new(store.clone(), rx);
    let projection = event_actor.projection();
    let event_task = tokio::spawn(event_actor.run());

    let command_actor = LandingCommandActor::new(platform(), tx);
    command_actor.publish_pending().await.unwrap();
    let platform_id = command_actor.platform_id().await;
    let service = LandingService::new(command_actor, init_noop_logger());

    let (r1, r2) = (Rocket::new(), Rocket::new());
    assert_eq!(service.check_for_landing(&r1, 5, 5).await.unwrap(), LandingOutcome::OkForLanding);
    assert_eq!(service.check_for_landing(&r2, 6, 5).await.unwrap(), LandingOutcome::Clash);
    assert_eq!(service.check_for_landing(&r2, 8, 8).await.unwrap(), LandingOutcome::OkForLanding);
    assert_eq!(service.check_for_landing(&r1, 12, 12).await.unwrap(), LandingOutcome::OkForLanding);
    assert_eq!(service.check_for_landing(&r1, 20, 20).await.unwrap(), LandingOutcome::OutOfPlatform);

    let live = service.command_actor().snapshot().await;
    drop(service);
    event_task.await.unwrap();

    // PlatformCreated + three landings; rejections are not stored.
    assert_eq!(store.stream_len(&platform_id).await, 4);
    let events = store.load_events(&platform_id, 0).await.unwrap();
    assert_eq!(events[0].event_type, "PlatformCreated");
    assert!(events[1..].iter().all(|e| e.event_type == "RocketLanded"));

    let projection = projection.read().await;
    let overview = projection.overview(&platform_id).unwrap();
    assert_eq!(overview.landings, 3);
    assert_eq!(projection.position_of(&platform_id, &r1.id), Some(Coordinates::new(12, 12)));
    assert_eq!(projection.position_of(&platform_id, &r2.id), Some(Coordinates::new(8, 8)));

    let replayed = LandingService::replay_platform(store.as_ref(), &platform_id)
        .await
        .unwrap();
    assert_eq!(replayed.held_positions(), live.held_positions());
    assert_eq!(replayed.reserved_cells(), live.reserved_cells());
    assert_eq!(replayed.version, live.version);
}

#[tokio::test]
async fn test_service_logs_each_decision() {
    let (tx, mut rx) = mpsc::channel(100);
    let drain = tokio::spawn(async move { while rx.recv().await.is_some() {} });
    let capture = Arc::new(BridgeCapture::new());
    let service = LandingService::new(
        LandingCommandActor::new(platform(), tx),
        capture.clone() as Arc<dyn DomainLogger>,
    );

    let (r1, r2) = (Rocket::new(), Rocket::new());
    service.check_for_landing(&r1, 5, 5).await.unwrap();
    service.check_for_landing(&r2, 5, 6).await.unwrap();
    service.check_for_landing(&r2, 0, 0).await.unwrap();
    drop(service);
    drain.await.unwrap();

    let msgs = capture.messages.lock().unwrap();
    assert_eq!(msgs.len(), 3);
    assert!(msgs[0].starts_with("INFO:") && msgs[0].ends_with("5,5: ok for landing"));
    assert!(msgs[1].starts_with("WARN:") && msgs[1].ends_with("5,6: clash"));
    assert!(msgs[2].starts_with("WARN:") && msgs[2].ends_with("0,0: out of platform"));
}

#[tokio::test]
async fn test_closed_channel_is_reported() {
    let (tx, rx) = mpsc::channel(1);
    drop(rx);
    let actor = LandingCommandActor::new(platform(), tx);
    let rocket = RocketId::new();

    let result = actor.check_for_landing(rocket, 6, 6).await;
    assert!(result.is_err());

    // The landing is undone when its event cannot be published.
    let snapshot = actor.snapshot().await;
    assert_eq!(actor.held_position(&rocket).await, None);
    assert!(snapshot.reserved_cells().is_empty());
    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.uncommitted_events().len(), 1);
    assert!(actor.publish_pending().await.is_err());
}

#[tokio::test]
async fn test_failed_publish_keeps_earlier_landings() {
    let (tx, mut rx) = mpsc::channel(100);
    let actor = LandingCommandActor::new(platform(), tx);
    let (r1, r2) = (RocketId::new(), RocketId::new());

    assert_eq!(actor.check_for_landing(r1, 5, 5).await.unwrap(), LandingOutcome::OkForLanding);
    while rx.try_recv().is_ok() {}
    drop(rx);

    assert!(actor.check_for_landing(r1, 12, 12).await.is_err());
    assert!(actor.check_for_landing(r2, 8, 8).await.is_err());

    let snapshot = actor.snapshot().await;
    assert_eq!(snapshot.held_position(&r1), Some(Coordinates::new(5, 5)));
    assert_eq!(snapshot.held_position(&r2), None);
    assert_eq!(snapshot.reserved_cells().len(), 4);
    assert_eq!(snapshot.version, 2);
    assert!(snapshot.uncommitted_events().is_empty());
}

#[tokio::test]
async fn test_replay_of_unknown_platform_fails() {
    let store = InMemoryEventStore::new();
    let result = LandingService::replay_platform(&store, "missing").await;
    assert!(result.is_err());
}
