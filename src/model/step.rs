use serde::Serialize;

/// Read-only snapshot handed to the next step on "Next"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutput {
    pub category: String,
    pub title: Option<String>,
    pub word_count: u32,
}

/// How the user left the step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StepOutcome {
    Back,
    Next(StepOutput),
}

/// Host collaborator that moves between wizard steps.
pub trait StepNavigator {
    /// Leave the step, discarding its state
    fn back(&mut self);
    /// Leave the step, carrying its output forward
    fn next(&mut self, output: StepOutput);
}

/// Navigator that records the outcome for the caller to inspect
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub outcome: Option<StepOutcome>,
}

impl StepNavigator for RecordingNavigator {
    fn back(&mut self) {
        self.outcome = Some(StepOutcome::Back);
    }

    fn next(&mut self, output: StepOutput) {
        self.outcome = Some(StepOutcome::Next(output));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_outcome_json() {
        let next = StepOutcome::Next(StepOutput {
            category: "Fun".into(),
            title: Some("Comedy trends".into()),
            word_count: 700,
        });
        assert_snapshot!(
            serde_json::to_string(&next).unwrap(),
            @r#"{"action":"next","category":"Fun","title":"Comedy trends","word_count":700}"#
        );
        assert_snapshot!(
            serde_json::to_string(&StepOutcome::Back).unwrap(),
            @r#"{"action":"back"}"#
        );
    }

    #[test]
    fn test_untitled_next_serializes_null() {
        let next = StepOutcome::Next(StepOutput {
            category: "News".into(),
            title: None,
            word_count: 100,
        });
        let json = serde_json::to_string(&next).unwrap();
        assert!(json.contains("\"title\":null"));
    }
}
