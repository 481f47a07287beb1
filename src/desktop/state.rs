use tokio::runtime::Runtime;
use uuid::Uuid;

use crate::client::forms::{CommentForm, LoginForm, PostForm, RegisterForm};
use crate::client::{workflow, ApiClient, ClientError, Config, ListingState, PostsStore, SessionStore};
use crate::shared::{Category, FieldError, PopulatedPost, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Login,
    Register,
    Posts,
    PostDetail(Uuid),
    NewPost,
}

/// Central application state shared across egui views.
pub struct AppState {
    runtime: Runtime,
    sessions: Option<SessionStore>,
    pub api: ApiClient,
    pub user: Option<UserProfile>,
    pub view: AppView,

    pub store: PostsStore,
    pub listing: ListingState,
    pub search_input: String,
    pub categories: Vec<Category>,
    pub current_post: Option<PopulatedPost>,

    pub post_form: PostForm,
    pub image_path: String,
    pub comment_form: CommentForm,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,

    pub field_errors: Vec<FieldError>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl AppState {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::from_env()?;
        let runtime = Runtime::new()?;
        let sessions = match SessionStore::default_location() {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("Session persistence disabled: {}", e);
                None
            }
        };

        let mut state = Self {
            runtime,
            sessions,
            api: ApiClient::new(config),
            user: None,
            view: AppView::Posts,
            store: PostsStore::new(),
            listing: ListingState::new(),
            search_input: String::new(),
            categories: Vec::new(),
            current_post: None,
            post_form: PostForm::default(),
            image_path: String::new(),
            comment_form: CommentForm::default(),
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            field_errors: Vec::new(),
            error: None,
            notice: None,
        };

        if let Some(sessions) = state.sessions.clone() {
            state.user = state.runtime.block_on(workflow::resume(&mut state.api, &sessions));
        }
        state.show_posts();
        Ok(state)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn clear_messages(&mut self) {
        self.error = None;
        self.notice = None;
        self.field_errors.clear();
    }

    /// Show a failed request. An expired token sends the user back to the
    /// login view.
    fn report(&mut self, context: &str, err: ClientError) {
        tracing::warn!("{}: {}", context, err);
        if err.is_unauthorized() && self.is_authenticated() {
            self.logout();
            self.view = AppView::Login;
            self.error = Some("Session expired, please log in again".to_string());
            return;
        }
        match err {
            ClientError::Validation(errors) => self.field_errors = errors,
            other => self.error = Some(format!("{}: {}", context, other)),
        }
    }

    // Navigation

    pub fn show_posts(&mut self) {
        self.clear_messages();
        self.view = AppView::Posts;
        self.refresh();
    }

    pub fn show_new_post(&mut self) {
        self.clear_messages();
        self.post_form.clear();
        self.image_path.clear();
        self.load_categories();
        self.view = AppView::NewPost;
    }

    pub fn open_post(&mut self, id: Uuid) {
        self.clear_messages();
        match self.runtime.block_on(self.api.get_post(id)) {
            Ok(post) => {
                self.current_post = Some(post);
                self.comment_form.clear();
                self.view = AppView::PostDetail(id);
            }
            Err(e) => self.report("Failed to load post", e),
        }
    }

    // Listing

    pub fn refresh(&mut self) {
        let result = self.runtime.block_on(workflow::refresh(
            &self.api,
            &mut self.store,
            &mut self.listing,
        ));
        if let Err(e) = result {
            self.report("Failed to load posts", e);
        }
    }

    pub fn search(&mut self) {
        if self.listing.set_query(self.search_input.clone()) {
            self.refresh();
        }
    }

    pub fn next_page(&mut self) {
        if self.listing.next_page() {
            self.refresh();
        }
    }

    pub fn prev_page(&mut self) {
        if self.listing.prev_page() {
            self.refresh();
        }
    }

    pub fn load_categories(&mut self) {
        match self.runtime.block_on(self.api.list_categories()) {
            Ok(categories) => self.categories = categories,
            Err(e) => self.report("Failed to load categories", e),
        }
    }

    // Mutations

    pub fn upload_image(&mut self) {
        let path = self.image_path.trim().to_string();
        if path.is_empty() {
            return;
        }
        match self
            .runtime
            .block_on(self.api.upload_image_file(std::path::Path::new(&path)))
        {
            Ok(upload) => {
                self.notice = Some("Image uploaded".to_string());
                self.post_form.featured_image = Some(upload.image_url);
            }
            Err(e) => self.report("Failed to upload image", e),
        }
    }

    pub fn create_post(&mut self) {
        self.clear_messages();
        let draft = match self.post_form.submit() {
            Ok(draft) => draft,
            Err(errors) => {
                self.field_errors = errors;
                return;
            }
        };

        self.view = AppView::Posts;
        let result = self.runtime.block_on(workflow::create_post(
            &self.api,
            &mut self.store,
            &mut self.listing,
            draft,
        ));
        match result {
            Ok(_) => {
                self.post_form.clear();
                self.image_path.clear();
                self.notice = Some("Post created".to_string());
            }
            Err(e) => {
                self.view = AppView::NewPost;
                self.report("Failed to create post", e);
            }
        }
    }

    pub fn delete_post(&mut self, id: Uuid) {
        self.clear_messages();
        let result = self.runtime.block_on(workflow::delete_post(
            &self.api,
            &mut self.store,
            &mut self.listing,
            id,
        ));
        match result {
            Ok(()) => {
                if self.view == AppView::PostDetail(id) {
                    self.current_post = None;
                    self.view = AppView::Posts;
                }
            }
            Err(e) => self.report("Failed to delete post", e),
        }
    }

    pub fn add_comment(&mut self) {
        let AppView::PostDetail(id) = self.view else {
            return;
        };
        self.clear_messages();
        let comment = match self.comment_form.submit() {
            Ok(comment) => comment,
            Err(errors) => {
                self.field_errors = errors;
                return;
            }
        };

        match self.runtime.block_on(workflow::add_comment(&self.api, id, comment)) {
            Ok(post) => {
                self.current_post = Some(post);
                self.comment_form.clear();
            }
            Err(e) => self.report("Failed to add comment", e),
        }
    }

    // Accounts

    pub fn login(&mut self) {
        self.clear_messages();
        let request = match self.login_form.submit() {
            Ok(request) => request,
            Err(errors) => {
                self.field_errors = errors;
                return;
            }
        };

        let result = self.runtime.block_on(workflow::login(
            &mut self.api,
            self.sessions.as_ref(),
            &request,
        ));
        match result {
            Ok(user) => {
                tracing::info!("Logged in as {}", user.email);
                self.user = Some(user);
                self.login_form.password.clear();
                self.show_posts();
            }
            Err(e) => self.report("Login failed", e),
        }
    }

    pub fn register(&mut self) {
        self.clear_messages();
        let request = match self.register_form.submit() {
            Ok(request) => request,
            Err(errors) => {
                self.field_errors = errors;
                return;
            }
        };

        match self.runtime.block_on(workflow::register(&self.api, &request)) {
            Ok(user) => {
                self.login_form.email = user.email;
                self.register_form = RegisterForm::default();
                self.view = AppView::Login;
                self.notice = Some("Account created, please log in".to_string());
            }
            Err(e) => self.report("Registration failed", e),
        }
    }

    pub fn logout(&mut self) {
        workflow::logout(&mut self.api, self.sessions.as_ref());
        self.user = None;
        self.current_post = None;
        self.store = PostsStore::new();
        self.listing = ListingState::new();
        self.clear_messages();
        self.show_posts();
    }

    pub fn show_login(&mut self) {
        self.clear_messages();
        self.view = AppView::Login;
    }

    pub fn show_register(&mut self) {
        self.clear_messages();
        self.view = AppView::Register;
    }
}
