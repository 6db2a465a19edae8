use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Credentials leaving the entry form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthSubmit {
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        email: String,
        password: String,
    },
}

#[derive(Properties, Clone, PartialEq)]
pub struct LoginPageProps {
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub busy: bool,
    pub on_submit: Callback<AuthSubmit>,
}

fn input_value(event: &InputEvent) -> Option<AttrValue> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| AttrValue::from(input.value()))
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let is_login = use_state(|| true);
    let username = use_state(AttrValue::default);
    let email = use_state(AttrValue::default);
    let password = use_state(AttrValue::default);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                username.set(value);
            }
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                email.set(value);
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                password.set(value);
            }
        })
    };

    let submit = {
        let is_login = is_login.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            let submit = if *is_login {
                AuthSubmit::Login {
                    username: username.to_string(),
                    password: password.to_string(),
                }
            } else {
                AuthSubmit::Register {
                    username: username.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                }
            };
            on_submit.emit(submit);
        })
    };

    let toggle = {
        let is_login = is_login.clone();
        Callback::from(move |_: MouseEvent| is_login.set(!*is_login))
    };

    let submit_label = if props.busy {
        "Loading..."
    } else if *is_login {
        "Enter Astraeum"
    } else {
        "Create Account"
    };
    let toggle_label = if *is_login {
        "Need an account? Register"
    } else {
        "Already have an account? Login"
    };

    html! {
        <div class="login-screen" data-testid="login-screen">
            <div class="login-card">
                <h1 class="login-title">{ "Thirteen Oracles of Astraeum" }</h1>
                <p class="login-subtitle">{ "Enter the fractured realm of ancient Greece" }</p>

                <div class="login-form">
                    <input
                        type="text"
                        placeholder="Username"
                        value={(*username).clone()}
                        oninput={on_username}
                        class="login-input"
                    />
                    if !*is_login {
                        <input
                            type="email"
                            placeholder="Email"
                            value={(*email).clone()}
                            oninput={on_email}
                            class="login-input"
                        />
                    }
                    <input
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password}
                        class="login-input"
                    />

                    if let Some(error) = &props.error {
                        <div class="login-error" role="alert">{ error.clone() }</div>
                    }

                    <button onclick={submit} disabled={props.busy} class="login-button">
                        { submit_label }
                    </button>
                </div>

                <button onclick={toggle} class="login-toggle">
                    { toggle_label }
                </button>
            </div>
        </div>
    }
}
