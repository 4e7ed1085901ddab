//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::canvas::CanvasPage;
use crate::state::{media::MediaState, scene::SceneState, view::ViewState};

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
/// Provides the shared state contexts, spawns the push channel, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Shared reactive state for all child components.
    let scene = RwSignal::new(SceneState::new());
    let view = RwSignal::new(ViewState::new());
    let media = RwSignal::new(MediaState::new());

    provide_context(scene);
    provide_context(view);
    provide_context(media);

    // The push channel lives for the whole app session; teardown cancels
    // any pending reconnect and closes the socket.
    #[cfg(feature = "hydrate")]
    {
        let channel = crate::net::channel::spawn_push_channel(scene, media);
        on_cleanup(move || channel.disconnect());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/canvascape.css"/>
        <Title text="Canvascape"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CanvasPage/>
            </Routes>
        </Router>
    }
}
