use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    {
        use_effect_with_deps(
            move |path| {
                gloo_console::error!(
                    "404 Error: User attempted to access non-existent route:",
                    path.clone()
                );
                || ()
            },
            path,
        );
    }

    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: radial-gradient(circle at 25% 25%, rgba(99, 102, 241, 0.2), transparent 60%), #0b0f1a;
                    color: #f3f4f6;
                }
                .not-found-card {
                    text-align: center;
                    padding: 3rem;
                    border-radius: 16px;
                    background: rgba(20, 24, 38, 0.75);
                    border: 1px solid rgba(99, 102, 241, 0.15);
                    animation: fadeUp 0.6s ease-out;
                }
                .not-found-code {
                    font-size: 6rem;
                    font-weight: 700;
                    background: linear-gradient(45deg, #6366f1, #22d3ee);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .not-found-card h1 { font-size: 1.5rem; margin: 0 0 0.5rem; }
                .not-found-card p { color: #9ca3af; margin-bottom: 2rem; }
                .not-found-card .home-link {
                    display: inline-block;
                    padding: 0.875rem 1.75rem;
                    border-radius: 12px;
                    background: linear-gradient(45deg, #6366f1, #22d3ee);
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
            <div class="not-found-card">
                <div class="not-found-code">{"404"}</div>
                <h1>{"Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist or has been moved."}</p>
                <Link<Route> to={Route::Home} classes="home-link">
                    {"Return to Home"}
                </Link<Route>>
            </div>
        </div>
    }
}
