//! Load Generations
//!
//! Token guard for in-flight fetches. Every load takes the next token before
//! it starts; a resolved load may only write state while its token is still
//! the newest one, so a response that outlives its route cannot overwrite a
//! later load's data.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadGeneration(u32);

impl LoadGeneration {
    /// Token for the load that supersedes this one
    pub fn next(self) -> LoadGeneration {
        LoadGeneration(self.0.wrapping_add(1))
    }

    /// Whether `token` still identifies the newest load
    pub fn is_current(self, token: LoadGeneration) -> bool {
        self == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_token_supersedes_previous() {
        let first = LoadGeneration::default().next();
        let second = first.next();
        assert!(!second.is_current(first));
        assert!(second.is_current(second));
    }

    #[test]
    fn test_resolved_load_only_applies_while_newest() {
        // Tracker loads for member A, then member B before A resolves
        let mut latest = LoadGeneration::default();
        let member_a = latest.next();
        latest = member_a;
        let member_b = latest.next();
        latest = member_b;

        // A's rows arrive late and must be dropped; B's still apply
        assert!(!latest.is_current(member_a));
        assert!(latest.is_current(member_b));

        // With no newer load started, the newest token keeps applying
        assert!(latest.is_current(latest));
    }
}
