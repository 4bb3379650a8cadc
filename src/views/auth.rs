use super::{layout, BUTTON, INPUT};
use crate::auth::repo::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    Register,
    Login,
}

impl AuthForm {
    fn title(self) -> &'static str {
        match self {
            AuthForm::Register => "Register",
            AuthForm::Login => "Login",
        }
    }
}

fn credential_fields() -> String {
    format!(
        r#"<div>
                <label for="email" class="block text-sm font-medium text-gray-700">Email</label>
                <input id="email" name="email" type="email" required class="{INPUT}">
            </div>
            <div>
                <label for="password" class="block text-sm font-medium text-gray-700">Password</label>
                <input id="password" name="password" type="password" required class="{INPUT}">
            </div>"#
    )
}

/// Register and login share one page; neither shows validation messages.
pub fn auth_page(form: AuthForm, user: Option<&User>) -> String {
    let fields = credential_fields();
    let (action, extra) = match form {
        AuthForm::Register => (
            "/register",
            format!(
                r#"<div class="flex items-center">
                <input id="is_admin" name="is_admin" type="checkbox" class="mr-2">
                <label for="is_admin" class="text-sm text-gray-700">Register as admin</label>
            </div>
            <button id="registerSubmit" type="submit" class="{BUTTON}">Create Account</button>"#
            ),
        ),
        AuthForm::Login => (
            "/login",
            format!(r#"<button id="loginSubmit" type="submit" class="{BUTTON}">Login</button>"#),
        ),
    };
    let title = form.title();
    let body = format!(
        r#"<div class="max-w-md mx-auto px-4 py-10">
        <h1 class="text-2xl font-bold mb-6">{title}</h1>
        <form method="post" action="{action}" class="bg-white rounded-xl border border-gray-200 p-6 shadow-sm space-y-4">
            {fields}
            {extra}
        </form>
    </div>"#
    );
    layout(title, user, &body)
}
