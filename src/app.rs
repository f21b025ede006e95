use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::ApiConfig;
use crate::core::services::TaskApi;
use crate::features::kanban::AppHeader;
use crate::features::notifications::{NoticeList, Notifier};
use crate::pages::{EditTask, Kanban, RegisterTask, RegisterUser};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    web_sys::console::log_1(&format!("API base: {}", config.base_url).into());

    provide_context(TaskApi::new(config));
    provide_context(Notifier::new());

    view! {
        <Router>
            <AppHeader />
            <NoticeList />
            <div class="app">
                <Routes fallback=|| view! { <p class="vazio">"Página não encontrada."</p> }>
                    <Route path=path!("/") view=Kanban />
                    <Route path=path!("/editar/:id") view=EditTask />
                    <Route path=path!("/cadastro/usuario") view=RegisterUser />
                    <Route path=path!("/cadastro/tarefa") view=RegisterTask />
                </Routes>
            </div>
        </Router>
    }
}
