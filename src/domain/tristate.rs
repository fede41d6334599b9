/// A user-intent flag with three states: unspecified, forced on, forced off.
///
/// `Unset` means "decide interactively or infer"; `Yes`/`No` mean the user
/// forced the value on the command line and must not be prompted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    #[default]
    Unset,
    Yes,
    No,
}

impl TriState {
    pub fn is_unset(self) -> bool {
        self == TriState::Unset
    }

    /// True only when the flag resolved to yes.
    pub fn is_yes(self) -> bool {
        self == TriState::Yes
    }

    /// True only when the flag resolved to no. An unset flag is neither.
    pub fn is_no(self) -> bool {
        self == TriState::No
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { TriState::Yes } else { TriState::No }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => TriState::Unset,
            Some(v) => v.into(),
        }
    }
}
