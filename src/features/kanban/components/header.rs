use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AppHeader() -> impl IntoView {
    view! {
        <header class="cabecalho">
            <h1>"Gerenciador de Tarefas"</h1>
        </header>
        <nav class="barra-navegacao" aria-label="Navegação principal">
            <ul>
                <li><A href="/cadastro/usuario">"Cadastro de Usuário"</A></li>
                <li><A href="/cadastro/tarefa">"Cadastro de Tarefa"</A></li>
                <li><A href="/">"Gerenciamento de Tarefas"</A></li>
            </ul>
        </nav>
    }
}
