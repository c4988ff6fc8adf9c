use chrono::Utc;
use log::{error, info};
use nexus_business::grid::{GridEngine, GridOptions, Row, Viewport};
use nexus_business::login::{DEMO_FILLED_MESSAGE, LOGIN_SUCCESS_MESSAGE};
use nexus_business::users::{user_columns, user_rows};
use nexus_business::{AppConfig, LoginForm, Route, Session, ToastQueue};

/// Rows and grid engine of the users page.
pub struct UsersPage {
    pub rows: Vec<Row>,
    pub grid: GridEngine,
}

impl UsersPage {
    pub fn new(options: GridOptions) -> Self {
        let rows = user_rows().unwrap_or_else(|err| {
            error!("Failed to load demo users: {err}");
            Vec::new()
        });
        Self {
            rows,
            grid: GridEngine::new(user_columns(), options),
        }
    }
}

/// The main application state.
pub struct State {
    pub config: AppConfig,
    pub session: Session,
    pub route: Route,
    pub login: LoginForm,
    pub toasts: ToastQueue,
    /// Viewport class of the last frame.
    pub viewport: Viewport,
    /// Side navigation on tablet and desktop.
    pub nav_open: bool,
    /// Overlay drawer on mobile.
    pub drawer_open: bool,
    pub users: UsersPage,
}

impl Default for State {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl State {
    pub fn new(config: AppConfig) -> Self {
        Self {
            toasts: ToastQueue::new(config.toast_duration),
            users: UsersPage::new(config.grid.clone()),
            session: Session::new(),
            route: Route::Login,
            login: LoginForm::default(),
            viewport: Viewport::default(),
            nav_open: true,
            drawer_open: false,
            config,
        }
    }

    /// Moves to `requested`, or wherever the auth gate sends it instead.
    pub fn navigate(&mut self, requested: Route) {
        let route = Route::resolve(requested, &self.session);
        if route == Route::Users && self.route != Route::Users {
            self.users = UsersPage::new(self.config.grid.clone());
        }
        if route != self.route {
            info!("Navigating from {} to {}", self.route.path(), route.path());
        }
        self.route = route;
        self.drawer_open = false;
    }

    /// The menu button toggles the drawer on mobile and the side panel elsewhere.
    pub fn toggle_nav(&mut self) {
        if self.viewport.is_mobile() {
            self.drawer_open = !self.drawer_open;
        } else {
            self.nav_open = !self.nav_open;
        }
    }

    /// Whether the menu button should offer to close the navigation.
    pub fn nav_visible(&self) -> bool {
        if self.viewport.is_mobile() {
            self.drawer_open
        } else {
            self.nav_open
        }
    }

    pub fn submit_login(&mut self) {
        match self.login.submit() {
            Ok(user) => {
                self.session.sign_in(user);
                self.toasts.success(LOGIN_SUCCESS_MESSAGE, Utc::now());
                self.navigate(Route::Dashboard);
            }
            Err(err) => {
                self.toasts.error(err.to_string(), Utc::now());
            }
        }
    }

    pub fn fill_demo_credentials(&mut self) {
        self.login.fill_demo();
        self.toasts.info(DEMO_FILLED_MESSAGE, Utc::now());
    }

    pub fn logout(&mut self) {
        self.session.sign_out();
        self.login.reset();
        self.navigate(Route::Login);
    }

    /// Re-applies the auth gate to the current route.
    pub fn enforce_auth(&mut self) {
        let resolved = Route::resolve(self.route, &self.session);
        if resolved != self.route {
            self.navigate(resolved);
        }
    }
}
