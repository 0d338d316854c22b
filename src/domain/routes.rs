/// Screens reachable in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Register,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Register => "/register",
        }
    }

    /// Unknown paths land on the home screen.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/register" | "register" => Route::Register,
            _ => Route::Home,
        }
    }
}
