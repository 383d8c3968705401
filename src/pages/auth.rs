use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::app::Route;
use crate::auth::DEMO_EMAIL;
use crate::forms::login::{self, submit_login, LoginForm};
use crate::forms::register::{self, submit_register, NextStep, RegisterForm};
use crate::forms::FormStatus;
use crate::mock::SKILLS;
use crate::models::{AccountType, Qualification, SubscriptionTier};
use crate::state::{AppState, AuthState, FlashState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Register,
}

#[component]
pub fn Auth() -> Element {
    rsx! { AuthForms { initial: AuthTab::Login } }
}

#[component]
pub fn Login() -> Element {
    rsx! { AuthForms { initial: AuthTab::Login } }
}

#[component]
pub fn Register() -> Element {
    rsx! { AuthForms { initial: AuthTab::Register } }
}

#[component]
fn AuthForms(initial: AuthTab) -> Element {
    let auth = use_context::<AuthState>();
    let mut tab = use_signal(|| initial);
    let active = *tab.read();
    let app_name = auth.config.app_name.clone();

    rsx! {
        div { class: "card auth",
            h2 { class: "title", "Welcome to {app_name}" }
            div { class: "tabs",
                button {
                    class: if active == AuthTab::Login { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(AuthTab::Login),
                    "Login"
                }
                button {
                    class: if active == AuthTab::Register { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(AuthTab::Register),
                    "Register"
                }
            }
            if active == AuthTab::Login {
                LoginPanel {}
            } else {
                RegisterPanel {}
            }
        }
    }
}

#[component]
fn LoginPanel() -> Element {
    let auth = use_context::<AuthState>();
    let state = use_context::<AppState>();
    let mut flash = use_context::<FlashState>();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);
    let mut status = use_signal(FormStatus::default);
    let mut user = state.user;

    let busy = status.read().is_submitting();
    let inline_error = status.read().error().map(str::to_string);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if status.read().is_submitting() {
            return;
        }
        let draft = form.read().clone();
        let client = auth.client.clone();
        status.set(FormStatus::Submitting);
        spawn(async move {
            match submit_login(&client, &draft).await {
                Ok(signed_in) => {
                    user.set(Some(signed_in));
                    status.set(FormStatus::Success);
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    let msg = login::failure_message(&err);
                    flash.show(msg.clone());
                    status.set(FormStatus::Failure(msg));
                }
            }
        });
    };

    rsx! {
        form { class: "stack", onsubmit: on_submit,
            label { "Email" }
            input {
                class: "text",
                r#type: "email",
                placeholder: "{DEMO_EMAIL}",
                value: "{form.read().email}",
                oninput: move |e| {
                    form.write().email = e.value();
                    status.write().edit();
                },
            }
            label { "Password" }
            input {
                class: "text",
                r#type: "password",
                value: "{form.read().password}",
                oninput: move |e| {
                    form.write().password = e.value();
                    status.write().edit();
                },
            }
            if let Some(msg) = inline_error {
                p { class: "error", "{msg}" }
            }
            button { class: "btn btn-primary", r#type: "submit", disabled: busy,
                if busy { "Logging in..." } else { "Login" }
            }
        }
    }
}

#[component]
fn RegisterPanel() -> Element {
    let auth = use_context::<AuthState>();
    let state = use_context::<AppState>();
    let mut flash = use_context::<FlashState>();
    let nav = use_navigator();
    let mut form = use_signal(RegisterForm::default);
    let mut status = use_signal(FormStatus::default);
    let mut user = state.user;

    let busy = status.read().is_submitting();
    let inline_error = status.read().error().map(str::to_string);
    let f = form.read().clone();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if status.read().is_submitting() {
            return;
        }
        let draft = form.read().clone();
        let client = auth.client.clone();
        status.set(FormStatus::Submitting);
        spawn(async move {
            match submit_register(&client, &draft).await {
                Ok(done) => {
                    user.set(Some(done.user));
                    status.set(FormStatus::Success);
                    flash.show(done.next.notice());
                    match done.next {
                        NextStep::Dashboard => nav.push(Route::Dashboard {}),
                        NextStep::PostTask => nav.push(Route::PostTask {}),
                    };
                }
                Err(err) => {
                    let msg = register::failure_message(&err);
                    flash.show(msg.clone());
                    status.set(FormStatus::Failure(msg));
                }
            }
        });
    };

    rsx! {
        form { class: "stack", onsubmit: on_submit,
            div { class: "poster",
                if let Some(src) = f.profile_image.clone() {
                    img { class: "avatar large", src: "{src}", alt: "Profile" }
                } else {
                    span { class: "avatar large", "{f.avatar_letter()}" }
                }
                div { class: "grow",
                    label { "Profile image URL (optional)" }
                    input {
                        class: "text",
                        value: "{f.profile_image.clone().unwrap_or_default()}",
                        oninput: move |e| {
                            let v = e.value();
                            form.write().profile_image = (!v.trim().is_empty()).then_some(v);
                        },
                    }
                }
            }
            div { class: "grid two",
                div {
                    label { "Full Name" }
                    input { class: "text", value: "{f.name}", oninput: move |e| { form.write().name = e.value(); status.write().edit(); } }
                }
                div {
                    label { "Email" }
                    input { class: "text", r#type: "email", value: "{f.email}", oninput: move |e| { form.write().email = e.value(); status.write().edit(); } }
                }
                div {
                    label { "Phone Number" }
                    input { class: "text", r#type: "tel", value: "{f.phone}", oninput: move |e| { form.write().phone = e.value(); status.write().edit(); } }
                }
                div {
                    label { "Location" }
                    input { class: "text", placeholder: "City, State", value: "{f.location}", oninput: move |e| { form.write().location = e.value(); status.write().edit(); } }
                }
                div {
                    label { "Password" }
                    input { class: "text", r#type: "password", value: "{f.password}", oninput: move |e| { form.write().password = e.value(); status.write().edit(); } }
                }
                div {
                    label { "Confirm Password" }
                    input { class: "text", r#type: "password", value: "{f.confirm_password}", oninput: move |e| { form.write().confirm_password = e.value(); status.write().edit(); } }
                }
            }
            label { "National ID/BVN" }
            input { class: "text", value: "{f.national_id}", oninput: move |e| { form.write().national_id = e.value(); status.write().edit(); } }

            h3 { "Education" }
            div { class: "grid two",
                div {
                    label { "Institution" }
                    input { class: "text", value: "{f.institution}", oninput: move |e| form.write().institution = e.value() }
                }
                div {
                    label { "Course of Study" }
                    input { class: "text", value: "{f.course_of_study}", oninput: move |e| form.write().course_of_study = e.value() }
                }
            }
            label { "Highest Qualification" }
            select {
                class: "text",
                onchange: move |e: FormEvent| form.write().highest_qualification = e.value().parse::<Qualification>().ok(),
                option { value: "", selected: f.highest_qualification.is_none(), "Select qualification" }
                for q in Qualification::ALL {
                    option { key: "{q.value()}", value: "{q.value()}", selected: f.highest_qualification == Some(q), "{q.label()}" }
                }
            }

            h3 { "Skills" }
            div { class: "checklist",
                for skill in SKILLS {
                    label { key: "have-{skill}", class: "check",
                        input {
                            r#type: "checkbox",
                            checked: f.skills.iter().any(|s| s == skill),
                            onchange: move |_| form.write().toggle_skill(skill),
                        }
                        "{skill}"
                    }
                }
            }
            if f.shows_other_skills() {
                input {
                    class: "text",
                    placeholder: "Other skills, separated by commas",
                    value: "{f.other_skills}",
                    oninput: move |e| form.write().other_skills = e.value(),
                }
            }
            h3 { "Skills You Want to Learn" }
            div { class: "checklist",
                for skill in SKILLS {
                    label { key: "learn-{skill}", class: "check",
                        input {
                            r#type: "checkbox",
                            checked: f.skills_to_learn.iter().any(|s| s == skill),
                            onchange: move |_| form.write().toggle_skill_to_learn(skill),
                        }
                        "{skill}"
                    }
                }
            }
            if f.shows_other_skills_to_learn() {
                input {
                    class: "text",
                    placeholder: "Other skills to learn, separated by commas",
                    value: "{f.other_skills_to_learn}",
                    oninput: move |e| form.write().other_skills_to_learn = e.value(),
                }
            }

            h3 { "Account Type" }
            div { class: "row",
                label { class: "check",
                    input {
                        r#type: "radio",
                        name: "account_type",
                        checked: f.account_type == AccountType::Full,
                        onchange: move |_| form.write().account_type = AccountType::Full,
                    }
                    "Full Account"
                }
                label { class: "check",
                    input {
                        r#type: "radio",
                        name: "account_type",
                        checked: f.account_type == AccountType::Guest,
                        onchange: move |_| form.write().account_type = AccountType::Guest,
                    }
                    "Guest (post tasks only)"
                }
            }
            if f.shows_subscription_tiers() {
                h3 { "Membership" }
                div { class: "row",
                    for tier in [SubscriptionTier::Basic, SubscriptionTier::Executive] {
                        label { key: "{tier.label()}", class: "check",
                            input {
                                r#type: "radio",
                                name: "subscription_tier",
                                checked: f.subscription_tier == tier,
                                onchange: move |_| form.write().subscription_tier = tier,
                            }
                            "{tier.label()}"
                        }
                    }
                }
            }
            label { class: "check",
                input {
                    r#type: "checkbox",
                    checked: f.accepted_terms,
                    onchange: move |_| {
                        let accepted = form.read().accepted_terms;
                        form.write().accepted_terms = !accepted;
                    },
                }
                "I agree to the Terms of Service and Privacy Policy"
            }
            if let Some(msg) = inline_error {
                p { class: "error", "{msg}" }
            }
            button { class: "btn btn-primary", r#type: "submit", disabled: busy,
                if busy { "Creating account..." } else { "Create Account" }
            }
        }
    }
}
