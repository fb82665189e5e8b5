use crate::state::AppState;
use egui::{Align2, Context, Window};

pub const HELP_TEXT: &str = "\
Natural language semantic analysis system
The system allows you to perform semantic analysis of English text, download text from a file, \
and save the text to a file in .txt format.
The result of the semantic analysis of the sentence is presented in the form of a tree, the nodes \
of which are lexemes and their definition, synonyms, antonyms, hyponyms and hypernyms.
To perform semantic analysis, you must enter text in the upper field and then click the \"Draw\" button. \
A long analysis can be stopped with the \"Cancel\" button.
To save, you must click the \"Save\" button, in the window that appears, select the desired file \
or specify a name for the new file.
To open the dictionary, you must click the menu item \"Open\", in the window that appears, select \
the desired file.";

/// Help window, shown while `state.show_help` is set
pub fn help_window(ctx: &Context, state: &mut AppState) {
    let mut open = state.show_help;
    let mut ok_clicked = false;
    Window::new("Help")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(HELP_TEXT);
            ui.add_space(8.0);
            ok_clicked = ui.button("OK").clicked();
        });
    state.show_help = open && !ok_clicked;
}

/// Error window for the pending error, if any
pub fn error_window(ctx: &Context, state: &mut AppState) {
    let Some(error) = state.error.clone() else {
        return;
    };

    let mut open = true;
    let mut ok_clicked = false;
    Window::new(error.title.as_str())
        .id(egui::Id::new("error_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.colored_label(ui.visuals().error_fg_color, &error.message);
            ui.add_space(8.0);
            ok_clicked = ui.button("OK").clicked();
        });

    if !open || ok_clicked {
        state.dismiss_error();
    }
}
