//! Arbitrary sequences of user actions against the live mock server.
//!
//! Whatever the mix of accepted and refused actions, the controller's list
//! must match the server's store once each action has finished.

use mock_server::{Db, Todo};
use proptest::prelude::*;
use todo_core::{ClientConfig, EditState, Item, RemoteClient, ReqwestTransport, ViewController};

#[derive(Debug, Clone)]
enum Action {
    Add(String),
    Toggle(usize),
    Edit(usize, String),
    Delete(usize),
}

fn action() -> impl Strategy<Value = Action> {
    // blank and repeated texts are allowed so guards get exercised too
    let text = "[a-c ]{0,4}";
    prop_oneof![
        3 => text.prop_map(Action::Add),
        2 => any::<usize>().prop_map(Action::Toggle),
        2 => (any::<usize>(), text).prop_map(|(at, text)| Action::Edit(at, text)),
        1 => any::<usize>().prop_map(Action::Delete),
    ]
}

/// Id of the row at `seed` modulo the list length, if the list has rows.
fn pick(controller: &ViewController<ReqwestTransport>, seed: usize) -> Option<i64> {
    let items = controller.items();
    (!items.is_empty()).then(|| items[seed % items.len()].id)
}

async fn server_items(db: &Db) -> Vec<Item> {
    db.read()
        .await
        .list()
        .into_iter()
        .map(|Todo { id, text, completed }| Item { id, text, completed })
        .collect()
}

async fn apply(controller: &mut ViewController<ReqwestTransport>, action: Action) {
    match action {
        Action::Add(text) => {
            controller.set_new_text(text);
            controller.add().await;
        }
        Action::Toggle(seed) => {
            if let Some(id) = pick(controller, seed) {
                controller.toggle(id).await;
            }
        }
        Action::Edit(seed, text) => {
            if let Some(id) = pick(controller, seed) {
                controller.start_edit(id);
                controller.set_draft(text);
                if !controller.save_edit().await.is_applied() {
                    controller.cancel_edit();
                }
            }
        }
        Action::Delete(seed) => {
            if let Some(id) = pick(controller, seed) {
                controller.delete(id).await;
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn list_matches_store_after_every_action(actions in prop::collection::vec(action(), 1..16)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let db = Db::default();
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(mock_server::run_with_db(listener, db.clone()));

            let config = ClientConfig::new(&format!("http://{addr}")).unwrap();
            let mut controller =
                ViewController::new(RemoteClient::new(&config, ReqwestTransport::new()));
            prop_assert!(controller.load().await.is_applied());

            for action in actions {
                let label = format!("{action:?}");
                apply(&mut controller, action).await;

                let server = server_items(&db).await;
                prop_assert_eq!(controller.items(), server.as_slice(), "after {}", label);
                prop_assert!(!controller.is_loading());
                prop_assert_eq!(controller.edit_state(), &EditState::Viewing);
            }
            Ok(())
        })?;
    }
}
