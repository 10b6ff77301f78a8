//! Auth Form Component
//!
//! Sign-in / sign-up tabs plus the wallet-connect dropdown. Submission only
//! simulates a delay through the scheduler; nothing is authenticated.

use leptos::prelude::*;

use crate::actions::use_actions;
use crate::mock;
use crate::schedule::use_scheduler;

#[component]
pub fn AuthForm() -> impl IntoView {
    let actions = use_actions();
    let scheduler = use_scheduler();

    let (is_loading, set_is_loading) = signal(false);
    let (tab, set_tab) = signal("signin");
    let (wallet_open, set_wallet_open) = signal(false);

    let submit_signin = {
        let scheduler = scheduler.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if is_loading.get() {
                return;
            }
            set_is_loading.set(true);
            scheduler.after(2000, Box::new(move || set_is_loading.set(false)));
        }
    };
    let submit_signup = {
        let scheduler = scheduler.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if is_loading.get() {
                return;
            }
            set_is_loading.set(true);
            scheduler.after(2000, Box::new(move || set_is_loading.set(false)));
        }
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <div class="auth-header">
                    <h2>"Welcome to Anoma Dynamic NFT"</h2>
                    <p class="stat-label">
                        "Connect your wallet or create an account to start trading with intents"
                    </p>
                </div>

                <div class="tab-bar">
                    <button
                        class=move || if tab.get() == "signin" { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set("signin")
                    >
                        "Sign In"
                    </button>
                    <button
                        class=move || if tab.get() == "signup" { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set("signup")
                    >
                        "Sign Up"
                    </button>
                </div>

                <Show when=move || tab.get() == "signin">
                    <form class="auth-form" on:submit=submit_signin.clone()>
                        <label class="filter-label">"Email"</label>
                        <input type="email" placeholder="Enter your email" required=true />
                        <label class="filter-label">"Password"</label>
                        <input type="password" placeholder="Enter your password" required=true />
                        <button type="submit" class="btn primary wide" prop:disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || tab.get() == "signup">
                    <form class="auth-form" on:submit=submit_signup.clone()>
                        <label class="filter-label">"Full Name"</label>
                        <input type="text" placeholder="Enter your full name" required=true />
                        <label class="filter-label">"Email"</label>
                        <input type="email" placeholder="Enter your email" required=true />
                        <label class="filter-label">"Password"</label>
                        <input type="password" placeholder="Create a password" required=true />
                        <button type="submit" class="btn primary wide" prop:disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Creating account..." } else { "Create Account" }}
                        </button>
                    </form>
                </Show>

                <div class="wallet-connect">
                    <button
                        class="btn outline wide"
                        prop:disabled=move || is_loading.get()
                        on:click=move |_| set_wallet_open.update(|open| *open = !*open)
                    >
                        "Connect Wallet"
                    </button>
                    <Show when=move || wallet_open.get()>
                        <div class="wallet-options">
                            {mock::WALLET_OPTIONS.iter().map(|(name, description)| {
                                let actions = actions.clone();
                                let scheduler = scheduler.clone();
                                view! {
                                    <button
                                        class="wallet-option"
                                        on:click=move |_| {
                                            actions.connect_wallet(name);
                                            set_wallet_open.set(false);
                                            set_is_loading.set(true);
                                            scheduler.after(2000, Box::new(move || set_is_loading.set(false)));
                                        }
                                    >
                                        <span class="participant-name">{*name}</span>
                                        <span class="stat-label">{*description}</span>
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                </div>

                <p class="auth-terms stat-label">
                    "By continuing, you agree to our Terms of Service and Privacy Policy"
                </p>
            </div>
        </div>
    }
}
