use crate::layout::Shell;
use crate::shared::query;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Portal pages. Navigation is a plain enum switch; the portal has no
/// nested routes, so a router would only add indirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Orders,
    Invoices,
    NewOrder,
    Profile,
}

impl Page {
    /// Key as used in the `?view=` query parameter.
    pub fn from_key(key: &str) -> Option<Page> {
        match key {
            "dashboard" => Some(Page::Dashboard),
            "orders" => Some(Page::Orders),
            "invoices" => Some(Page::Invoices),
            "new-order" => Some(Page::NewOrder),
            "profile" => Some(Page::Profile),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Orders => "Orders",
            Page::Invoices => "Invoices",
            Page::NewOrder => "New Order",
            Page::Profile => "My Account",
        }
    }
}

/// Document reference the portal was entered with (`?doc=`). The matching
/// list row is flagged briefly after it first renders; the target is taken
/// exactly once so later reloads do not flash again.
#[derive(Clone, Copy)]
pub struct ArrivalTarget(pub RwSignal<Option<String>>);

impl ArrivalTarget {
    pub fn take(&self) -> Option<String> {
        let value = self.0.get_untracked();
        if value.is_some() {
            self.0.set(None);
        }
        value
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let entry = query::current();
    let initial_page = entry
        .view
        .as_deref()
        .and_then(Page::from_key)
        .unwrap_or(Page::Dashboard);

    let active_page = RwSignal::new(initial_page);
    provide_context(ArrivalTarget(RwSignal::new(entry.doc)));

    view! { <Shell active_page /> }
}
