//! Action Handlers
//!
//! Every "backend" button (join, vote, trade, execute) dispatches through
//! [`ActionHandler`] so the pages stay decoupled from whatever eventually
//! implements these actions. The default [`ConsoleActions`] only logs.

use std::sync::Arc;

use leptos::prelude::*;

use crate::models::VoteChoice;

/// Discrete operations on an intent card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentAction {
    Edit,
    Delete,
    Toggle,
    Execute,
}

impl IntentAction {
    pub fn as_str(self) -> &'static str {
        match self {
            IntentAction::Edit => "edit",
            IntentAction::Delete => "delete",
            IntentAction::Toggle => "toggle",
            IntentAction::Execute => "execute",
        }
    }
}

/// Swappable side-effect hooks behind every interactive element.
pub trait ActionHandler: Send + Sync {
    fn intent_action(&self, intent_id: &str, action: IntentAction);
    fn create_intent(&self, intent_id: &str);
    fn join_dao(&self, dao_id: &str);
    fn trade_for_tokens(&self, dao_id: &str);
    fn vote(&self, proposal_id: &str, choice: VoteChoice);
    fn view_match(&self, match_id: &str);
    fn initiate_trade(&self, match_id: &str);
    fn execute_trade(&self, trade_id: &str);
    fn connect_wallet(&self, provider: &str);
}

pub type Actions = Arc<dyn ActionHandler>;

/// Get the injected handler from context.
pub fn use_actions() -> Actions {
    expect_context::<Actions>()
}

/// Default handler: logs each dispatch to the browser console and does
/// nothing else.
pub struct ConsoleActions;

fn log(message: String) {
    web_sys::console::log_1(&message.into());
}

impl ActionHandler for ConsoleActions {
    fn intent_action(&self, intent_id: &str, action: IntentAction) {
        log(format!("[ACTIONS] {} intent: {}", action.as_str(), intent_id));
    }

    fn create_intent(&self, intent_id: &str) {
        log(format!("[ACTIONS] created intent: {}", intent_id));
    }

    fn join_dao(&self, dao_id: &str) {
        log(format!("[ACTIONS] joining DAO: {}", dao_id));
    }

    fn trade_for_tokens(&self, dao_id: &str) {
        log(format!("[ACTIONS] trading for tokens: {}", dao_id));
    }

    fn vote(&self, proposal_id: &str, choice: VoteChoice) {
        log(format!(
            "[ACTIONS] voting on proposal: {} {}",
            proposal_id,
            choice.label()
        ));
    }

    fn view_match(&self, match_id: &str) {
        log(format!("[ACTIONS] view match details: {}", match_id));
    }

    fn initiate_trade(&self, match_id: &str) {
        log(format!("[ACTIONS] initiate trade: {}", match_id));
    }

    fn execute_trade(&self, trade_id: &str) {
        log(format!("[ACTIONS] execute trade: {}", trade_id));
    }

    fn connect_wallet(&self, provider: &str) {
        log(format!("[ACTIONS] connecting to {} wallet...", provider));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records dispatches so tests can assert wiring without a browser.
    #[derive(Default)]
    struct RecordingActions {
        calls: Mutex<Vec<String>>,
    }

    impl ActionHandler for RecordingActions {
        fn intent_action(&self, intent_id: &str, action: IntentAction) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("intent:{}:{}", action.as_str(), intent_id));
        }

        fn create_intent(&self, intent_id: &str) {
            self.calls.lock().unwrap().push(format!("create:{intent_id}"));
        }

        fn join_dao(&self, dao_id: &str) {
            self.calls.lock().unwrap().push(format!("join:{dao_id}"));
        }

        fn trade_for_tokens(&self, dao_id: &str) {
            self.calls.lock().unwrap().push(format!("trade:{dao_id}"));
        }

        fn vote(&self, proposal_id: &str, choice: VoteChoice) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("vote:{}:{}", proposal_id, choice.label()));
        }

        fn view_match(&self, match_id: &str) {
            self.calls.lock().unwrap().push(format!("view:{match_id}"));
        }

        fn initiate_trade(&self, match_id: &str) {
            self.calls.lock().unwrap().push(format!("initiate:{match_id}"));
        }

        fn execute_trade(&self, trade_id: &str) {
            self.calls.lock().unwrap().push(format!("execute:{trade_id}"));
        }

        fn connect_wallet(&self, provider: &str) {
            self.calls.lock().unwrap().push(format!("wallet:{provider}"));
        }
    }

    #[test]
    fn dispatch_through_trait_object() {
        let recorder = Arc::new(RecordingActions::default());
        let handler: Actions = recorder.clone();

        handler.intent_action("1", IntentAction::Toggle);
        handler.vote("prop2", VoteChoice::Against);
        handler.execute_trade("trade_abc123");

        let calls = recorder.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                "intent:toggle:1".to_string(),
                "vote:prop2:against".to_string(),
                "execute:trade_abc123".to_string(),
            ]
        );
    }
}
