//! Native mode: every shortcut becomes the host's built-in command

use super::Interceptor;
use crate::shortcut::Shortcut;
use crate::surface::Page;

impl Interceptor {
    pub(super) fn run_native(&mut self, shortcut: Shortcut, page: &mut dyn Page) {
        if !page.exec_command(shortcut) {
            log::debug!("Host has no '{}' command", shortcut.command_name());
        }
    }
}
