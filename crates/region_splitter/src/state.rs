// crates/region_splitter/src/state.rs

/// Where the splitter is relative to the current region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Outside any region; plain text is copied.
    #[default]
    Copying,
    /// Inside a marker run that has not (yet) matched the selection.
    SkippingUnmatchedRegion,
    /// Inside the body of an unmatched region, waiting for the next marker.
    SkippingThenMarker,
    /// Inside a marker run that contained a matching marker.
    CopyingMatchedRegion,
}

/// How a single grapheme relates to the index and the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
    /// In the index and equal to the selected or wildcard marker.
    MatchingMarker,
    /// In the index but neither selected nor wildcard.
    OtherMarker,
    /// Not in the index.
    Text,
}

/// What happens to the grapheme that caused a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Append,
    Discard,
}

/// The complete transition table.
///
/// A matched marker run stays matched until a text grapheme arrives, even if
/// an unmatched marker follows inside the same run.
pub fn transition(state: State, class: Class) -> (State, Action) {
    use Action::*;
    use Class::*;
    use State::*;

    match (state, class) {
        (Copying, MatchingMarker) => (CopyingMatchedRegion, Discard),
        (Copying, OtherMarker) => (SkippingUnmatchedRegion, Discard),
        (Copying, Text) => (Copying, Append),

        (SkippingUnmatchedRegion, MatchingMarker) => (CopyingMatchedRegion, Discard),
        (SkippingUnmatchedRegion, OtherMarker) => (SkippingUnmatchedRegion, Discard),
        (SkippingUnmatchedRegion, Text) => (SkippingThenMarker, Discard),

        (SkippingThenMarker, MatchingMarker) => (CopyingMatchedRegion, Discard),
        (SkippingThenMarker, OtherMarker) => (SkippingUnmatchedRegion, Discard),
        (SkippingThenMarker, Text) => (SkippingThenMarker, Discard),

        (CopyingMatchedRegion, MatchingMarker) => (CopyingMatchedRegion, Discard),
        (CopyingMatchedRegion, OtherMarker) => (CopyingMatchedRegion, Discard),
        (CopyingMatchedRegion, Text) => (Copying, Append),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [State; 4] = [
        State::Copying,
        State::SkippingUnmatchedRegion,
        State::SkippingThenMarker,
        State::CopyingMatchedRegion,
    ];

    #[test]
    fn test_markers_are_always_discarded() {
        for state in STATES {
            for class in [Class::MatchingMarker, Class::OtherMarker] {
                let (_, action) = transition(state, class);
                assert_eq!(action, Action::Discard, "{:?} + {:?}", state, class);
            }
        }
    }

    #[test]
    fn test_matching_marker_always_opens_match() {
        for state in STATES {
            let (next, _) = transition(state, Class::MatchingMarker);
            assert_eq!(next, State::CopyingMatchedRegion);
        }
    }

    #[test]
    fn test_unmatched_marker_does_not_cancel_matched_run() {
        assert_eq!(
            transition(State::CopyingMatchedRegion, Class::OtherMarker),
            (State::CopyingMatchedRegion, Action::Discard)
        );
    }

    #[test]
    fn test_text_is_appended_only_from_copying_states() {
        assert_eq!(transition(State::Copying, Class::Text), (State::Copying, Action::Append));
        assert_eq!(
            transition(State::CopyingMatchedRegion, Class::Text),
            (State::Copying, Action::Append)
        );
        assert_eq!(
            transition(State::SkippingUnmatchedRegion, Class::Text),
            (State::SkippingThenMarker, Action::Discard)
        );
        assert_eq!(
            transition(State::SkippingThenMarker, Class::Text),
            (State::SkippingThenMarker, Action::Discard)
        );
    }

    #[test]
    fn test_unmatched_marker_from_skip_body_restarts_marker_run() {
        assert_eq!(
            transition(State::SkippingThenMarker, Class::OtherMarker),
            (State::SkippingUnmatchedRegion, Action::Discard)
        );
        assert_eq!(
            transition(State::Copying, Class::OtherMarker),
            (State::SkippingUnmatchedRegion, Action::Discard)
        );
    }

    #[test]
    fn test_default_state_is_copying() {
        assert_eq!(State::default(), State::Copying);
    }
}
