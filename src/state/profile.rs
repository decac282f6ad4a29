/// Slice `profile`: cuenta con la que se inició sesión
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    SignedIn { username: String },
    Cleared,
}

impl ProfileState {
    pub fn reduce(self, action: ProfileAction) -> Self {
        match action {
            ProfileAction::SignedIn { username } => Self {
                username: Some(username),
            },
            ProfileAction::Cleared => Self::default(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("Administrator")
    }
}
