use console::style;

pub enum Style {
    Command, // Commands, inline code, flags, and type names
    HintPrefix,
    ErrorPrefix,
    Heading,
}

impl Style {
    pub fn paint<S: AsRef<str>>(&self, message: S) -> String {
        let message_ref = message.as_ref();

        if is_no_color_set() {
            return message_ref.to_string();
        }

        match &self {
            Style::Command => style(message_ref).yellow(),
            Style::HintPrefix => style(message_ref).cyan().bold(),
            Style::ErrorPrefix => style(message_ref).red().bold(),
            Style::Heading => style(message_ref).bold(),
        }
        .to_string()
    }
}

pub fn is_no_color_set() -> bool {
    is_bool_env_var_set("NO_COLOR") || is_bool_env_var_set("GQLDOC_NO_COLOR")
}

fn is_bool_env_var_set(key: &str) -> bool {
    !matches!(
        std::env::var(key).as_deref(),
        Err(..) | Ok("") | Ok("0") | Ok("false") | Ok("False") | Ok("FALSE")
    )
}
