pub(crate) mod convert;
pub(crate) mod games;
pub(crate) mod render;
pub(crate) mod slug;

use ggmax_core::FormatRegistry;

use crate::CliError;

/// Fail early with the list of known games when `game` is not configured.
pub(crate) fn require_game(registry: &FormatRegistry, game: &str) -> Result<(), CliError> {
    if registry.get(game).is_some() {
        return Ok(());
    }
    let known: Vec<&str> = registry.games().collect();
    Err(CliError::unknown_game(format!(
        "'{}' (known games: {})",
        game,
        if known.is_empty() {
            "none".to_string()
        } else {
            known.join(", ")
        }
    )))
}
