use std::fmt;

/// Finalization state of a collection.
///
/// States only ever move forward in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum State {
    /// Every query re-resolves; mutation is allowed.
    #[default]
    Mutable,
    /// The next query freezes the value and moves to [`State::FinalLenient`].
    FinalizeNextQuery,
    /// Frozen; mutation is ignored with a deprecation warning.
    FinalLenient,
    /// Frozen; mutation is an error.
    FinalStrict,
}

/// What a mutator may do in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationPolicy {
    /// Apply the change.
    Allow,
    /// Drop the change and warn.
    Ignore,
    /// Refuse the change with an error.
    Reject,
}

impl State {
    /// Whether the value has been frozen.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::FinalLenient | Self::FinalStrict)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathset::State;
    ///
    /// assert!(State::Mutable.can_transition_to(State::FinalStrict));
    /// assert!(State::FinalLenient.can_transition_to(State::FinalStrict));
    /// assert!(!State::FinalStrict.can_transition_to(State::Mutable));
    /// assert!(!State::Mutable.can_transition_to(State::FinalLenient));
    /// ```
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Mutable, Self::FinalizeNextQuery | Self::FinalStrict)
            | (Self::FinalizeNextQuery, Self::FinalLenient | Self::FinalStrict)
            | (Self::FinalLenient, Self::FinalStrict) => true,
            _ => false,
        }
    }

    /// How mutators behave in this state.
    ///
    /// A collection scheduled for finalization has not computed its value
    /// yet, so it still accepts changes.
    #[must_use]
    pub const fn mutation_policy(self) -> MutationPolicy {
        match self {
            Self::Mutable | Self::FinalizeNextQuery => MutationPolicy::Allow,
            Self::FinalLenient => MutationPolicy::Ignore,
            Self::FinalStrict => MutationPolicy::Reject,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mutable => write!(f, "mutable"),
            Self::FinalizeNextQuery => write!(f, "finalize-next-query"),
            Self::FinalLenient => write!(f, "final-lenient"),
            Self::FinalStrict => write!(f, "final-strict"),
        }
    }
}

/// Result of a mutation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The element set changed as requested.
    Applied,
    /// The collection is leniently final; nothing changed.
    Ignored,
}

impl MutationOutcome {
    /// Whether the mutation took effect.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
