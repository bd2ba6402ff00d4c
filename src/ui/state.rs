//! Explicit load state of the user list

use super::loading_indicator::LoadingIndicator;
use super::picker::UserPicker;
use crate::constants::ui::LOADING_TEXT;
use crate::data_fetcher::UserWithNameMeta;
use crate::error::AppError;

/// What the interactive screen is showing: the fetch in progress, the
/// picker over the fetched users, or the reason the fetch failed.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading(LoadingIndicator),
    Loaded(UserPicker),
    Failed(String),
}

impl LoadState {
    pub fn loading() -> Self {
        Self::Loading(LoadingIndicator::new(LOADING_TEXT))
    }

    /// Converts the outcome of the users fetch into the next state
    pub fn from_fetch_result(result: Result<Vec<UserWithNameMeta>, AppError>) -> Self {
        match result {
            Ok(users) => {
                tracing::info!("Loaded {} users into picker", users.len());
                Self::Loaded(UserPicker::new(users))
            }
            Err(e) => {
                tracing::error!("Failed to load users: {e}");
                Self::Failed(e.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    pub fn picker(&self) -> Option<&UserPicker> {
        match self {
            Self::Loaded(picker) => Some(picker),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_initial_state_is_loading() {
        let state = LoadState::loading();
        assert!(state.is_loading());
        assert!(state.picker().is_none());
    }

    #[test]
    fn test_successful_fetch_loads_picker() {
        let users = TestDataBuilder::sorted_users(&["Leanne Graham", "Clementine Bauch"]);
        let state = LoadState::from_fetch_result(Ok(users));
        assert_eq!(state.picker().map(|p| p.match_count()), Some(2));
    }

    #[test]
    fn test_failed_fetch_keeps_message() {
        let state = LoadState::from_fetch_result(Err(AppError::api_not_found(
            "https://example.com/users",
        )));
        match state {
            LoadState::Failed(message) => assert!(message.contains("404")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
