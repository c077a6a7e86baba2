use crate::config::{TitleConfig, TitleStyle};
use crate::core::ansi::AnsiFormatter;
use crate::core::template::{self, TemplateContext};
use crate::env::Environment;

/// Produces the console-title escape sequence for the configured style.
/// The fixed styles bypass the template engine and use the context fields
/// directly.
pub struct ConsoleTitle<'a> {
    env: &'a dyn Environment,
    config: &'a TitleConfig,
    ansi: AnsiFormatter,
}

impl<'a> ConsoleTitle<'a> {
    pub fn new(env: &'a dyn Environment, config: &'a TitleConfig) -> Self {
        let ansi = AnsiFormatter::new(&env.shell_name());
        Self { env, config, ansi }
    }

    /// The escaped title, ready to write to stdout.
    pub fn render(&self) -> String {
        let context = TemplateContext::build(self.env, &self.config.template);
        let text = match self.config.style {
            TitleStyle::FolderName => context.folder.clone(),
            TitleStyle::FullPath => context.pwd.clone(),
            TitleStyle::Template => template::render(&self.config.template, &context),
        };
        self.ansi.title(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::mock::MockEnvironment;

    fn title_for(env: &MockEnvironment, style: TitleStyle, template: &str) -> String {
        let config = TitleConfig {
            style,
            template: template.to_string(),
        };
        ConsoleTitle::new(env, &config).render()
    }

    #[test]
    fn folder_name_of_home_is_tilde() {
        let env = MockEnvironment::new().with_cwd("/usr/home").with_home("/usr/home");
        assert_eq!(
            title_for(&env, TitleStyle::FolderName, ""),
            "\x1b]0;~\x07"
        );
    }

    #[test]
    fn full_path_is_home_relative() {
        let env = MockEnvironment::new().with_cwd("/usr/home/jan").with_home("/usr/home");
        assert_eq!(
            title_for(&env, TitleStyle::FullPath, ""),
            "\x1b]0;~/jan\x07"
        );
    }

    #[test]
    fn template_with_env_var_pwd_and_privilege() {
        let env = MockEnvironment::new()
            .with_cwd("C:\\vagrant")
            .with_separator('\\')
            .with_shell("PowerShell")
            .with_elevated(true)
            .with_env_var("USERDOMAIN", "MyCompany");

        let rendered = title_for(
            &env,
            TitleStyle::Template,
            "{{Env.USERDOMAIN}} :: {{PWD}}{{#if Root}} :: Admin{{/if}} :: {{Shell}}",
        );
        assert_eq!(rendered, "\x1b]0;MyCompany :: C:\\vagrant :: Admin :: PowerShell\x07");
    }

    #[test]
    fn template_with_folder() {
        let env = MockEnvironment::new()
            .with_cwd("C:\\vagrant")
            .with_separator('\\')
            .with_shell("PowerShell");

        let rendered = title_for(
            &env,
            TitleStyle::Template,
            "{{Folder}}{{#if Root}} :: Admin{{/if}} :: {{Shell}}",
        );
        assert_eq!(rendered, "\x1b]0;vagrant :: PowerShell\x07");
    }

    #[test]
    fn template_with_user_and_host() {
        let env = MockEnvironment::new()
            .with_user("MyUser")
            .with_host("MyHost")
            .with_shell("PowerShell")
            .with_elevated(true);

        let rendered = title_for(
            &env,
            TitleStyle::Template,
            "{{User}}@{{Host}}{{#if Root}} :: Admin{{/if}} :: {{Shell}}",
        );
        assert_eq!(rendered, "\x1b]0;MyUser@MyHost :: Admin :: PowerShell\x07");
    }

    #[test]
    fn host_error_does_not_abort_a_template_not_using_it() {
        let env = MockEnvironment::new()
            .with_user("MyUser")
            .with_shell("PowerShell")
            .with_host_error("I have a bad feeling about this");

        let rendered = title_for(
            &env,
            TitleStyle::Template,
            "Not using Host only {{User}} and {{Shell}}",
        );
        assert_eq!(rendered, "\x1b]0;Not using Host only MyUser and PowerShell\x07");
    }

    #[test]
    fn host_error_substitutes_empty_in_a_template_using_it() {
        let env = MockEnvironment::new()
            .with_user("MyUser")
            .with_shell("PowerShell")
            .with_host_error("I have a bad feeling about this");

        let rendered = title_for(&env, TitleStyle::Template, "{{User}}@{{Host}} :: {{Shell}}");
        assert_eq!(rendered, "\x1b]0;MyUser@ :: PowerShell\x07");
    }
}
