pub mod sidebar;

use leptos::prelude::*;

use crate::dashboards::overview::ui::dashboard::DashboardPage;
use crate::domain::invoices::ui::list::InvoicesPage;
use crate::domain::orders::ui::list::OrdersPage;
use crate::domain::sales_entry::ui::form::NewOrderPage;
use crate::routes::routes::Page;
use crate::system::pages::profile::ProfilePage;
use sidebar::Sidebar;

#[component]
pub fn Shell(active_page: RwSignal<Page>) -> impl IntoView {
    view! {
        <div style="display: flex; min-height: 100vh; background: #f1f3f5;">
            <Sidebar active_page />
            <main style="flex: 1; padding: 20px; min-width: 0;">
                {move || match active_page.get() {
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Page::Orders => view! { <OrdersPage /> }.into_any(),
                    Page::Invoices => view! { <InvoicesPage /> }.into_any(),
                    Page::NewOrder => view! { <NewOrderPage /> }.into_any(),
                    Page::Profile => view! { <ProfilePage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
