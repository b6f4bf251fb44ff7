//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::NavBar;
use crate::components::toast::Toasts;
use crate::pages::about::AboutPage;
use crate::pages::admin::contacts::AdminContactsPage;
use crate::pages::admin::dashboard::DashboardPage;
use crate::pages::admin::login::LoginPage;
use crate::pages::admin::projects::AdminProjectsPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::project_detail::ProjectDetailPage;
use crate::pages::projects::ProjectsPage;
use crate::pages::services::ServicesPage;
use crate::pages::stories::SuccessStoriesPage;
use crate::state::auth::AuthSession;
use crate::state::ui::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts and sets up client-side routing.
/// Session restoration runs once on hydration; with no stored token it
/// settles immediately without touching the network.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AuthSession::provide();
    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.restore().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Stylesheet id="leptos" href="/pkg/granite-peak.css"/>
        <Title text="Granite Peak Construction"/>

        <Router>
            <NavBar/>
            <main class="page-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectDetailPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("stories") view=SuccessStoriesPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=DashboardPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("projects")) view=AdminProjectsPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("contacts")) view=AdminContactsPage/>
                </Routes>
            </main>
            <Footer/>
            <Toasts/>
        </Router>
    }
}
