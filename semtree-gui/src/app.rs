use crate::{
    components::{dialogs, MenuBarComponent, StatusBarComponent, TextInputComponent, TreeCanvasComponent},
    controllers::{file_controller, DrawController, DrawOutcome, DrawStart},
    signals::SignalBus,
    state::AppState,
    GuiComponent, GuiMessage, GuiResult,
};
use eframe::egui::{self, Context, Ui};
use semtree_core::{LexicalDatabase, SemTreeConfig};
use std::sync::Arc;

pub struct SemTreeApp {
    state: AppState,
    signal_bus: Arc<SignalBus>,

    menu_bar: MenuBarComponent,
    text_input: TextInputComponent,
    tree_canvas: TreeCanvasComponent,
    status_bar: StatusBarComponent,

    draw: DrawController,
}

impl SemTreeApp {
    /// `lexicon` is the opened database, or why it could not be opened; the
    /// window starts either way and reports the failure on Draw
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: &SemTreeConfig,
        lexicon: Result<Arc<dyn LexicalDatabase>, String>,
    ) -> GuiResult<Self> {
        let signal_bus = Arc::new(SignalBus::new());
        let draw = DrawController::new(lexicon, config.assembly.into());

        let mut state = AppState::new();
        state.lexicon_name = draw.lexicon_name().map(str::to_string);
        state.status = "Ready".to_string();

        Ok(Self {
            state,
            signal_bus: signal_bus.clone(),
            menu_bar: MenuBarComponent::new(signal_bus)?,
            text_input: TextInputComponent::new(),
            tree_canvas: TreeCanvasComponent::new(config.canvas.clone()),
            status_bar: StatusBarComponent,
            draw,
        })
    }

    fn handle_message(&mut self, ctx: &Context, message: GuiMessage) {
        match message {
            GuiMessage::OpenRequested => self.open(),
            GuiMessage::SaveRequested => self.save(),
            GuiMessage::DrawRequested => self.request_draw(ctx),
            GuiMessage::CancelRequested => self.draw.cancel(),
            GuiMessage::HelpRequested => self.state.show_help = true,
        }
    }

    fn open(&mut self) {
        if self.state.is_drawing() {
            log::warn!("open requested while drawing; ignored");
            return;
        }
        let start_dir = self.state.current_file.as_deref().and_then(|p| p.parent());
        if let Some(path) = file_controller::pick_open_path(start_dir) {
            file_controller::open_into(&mut self.state, path);
        }
    }

    fn save(&mut self) {
        if let Some(path) = file_controller::pick_save_path(self.state.current_file.as_deref()) {
            file_controller::save_from(&mut self.state, &path);
        }
    }

    fn request_draw(&mut self, ctx: &Context) {
        if self.state.is_drawing() {
            log::info!("draw requested while drawing; ignored");
            return;
        }

        self.tree_canvas.clear();
        let text = self.state.begin_draw();
        let start = self.draw.start(text, Some(ctx.clone()));
        apply_start(&mut self.state, start);
    }

    fn render_main_layout(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu_bar")
            .show(ctx, |ui| render_component(&mut self.menu_bar, ui, ctx, &mut self.state));

        egui::TopBottomPanel::bottom("status_bar")
            .show(ctx, |ui| render_component(&mut self.status_bar, ui, ctx, &mut self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            render_component(&mut self.text_input, ui, ctx, &mut self.state);
            ui.separator();
            render_component(&mut self.tree_canvas, ui, ctx, &mut self.state);
        });

        dialogs::help_window(ctx, &mut self.state);
        dialogs::error_window(ctx, &mut self.state);
    }
}

impl eframe::App for SemTreeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if let Some(outcome) = self.draw.poll() {
            apply_outcome(&mut self.state, &mut self.tree_canvas, outcome);
        }

        self.render_main_layout(ctx);

        for message in self.signal_bus.drain() {
            self.handle_message(ctx, message);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.draw.cancel();
    }
}

/// Render one component; a failure is logged under the component's name
fn render_component(component: &mut dyn GuiComponent, ui: &mut Ui, ctx: &Context, state: &mut AppState) {
    if let Err(e) = component.render(ui, ctx, state) {
        log::error!("{} failed to render: {}", component.name(), e);
    }
}

/// Leave the drawing phase again when no worker was started
fn apply_start(state: &mut AppState, start: GuiResult<DrawStart>) {
    match start {
        Ok(DrawStart::Started) => {}
        Ok(DrawStart::AlreadyRunning) => state.finish_draw(),
        Ok(DrawStart::NoLexicon(reason)) => {
            state.finish_draw();
            state.show_error("Lexical database unavailable", reason);
        }
        Err(e) => {
            state.finish_draw();
            state.show_error("Draw failed", e.to_string());
        }
    }
}

/// Put a finished draw on the canvas, or tell the user why there is none
fn apply_outcome(state: &mut AppState, canvas: &mut TreeCanvasComponent, outcome: DrawOutcome) {
    state.finish_draw();
    state.last_draw = Some(outcome.elapsed);
    log::info!("draw finished in {:?}", outcome.elapsed);

    if outcome.is_cancelled() {
        state.status = "Draw cancelled".to_string();
        return;
    }
    match outcome.result {
        Ok(Some(notation)) => match canvas.show_notation(&notation) {
            Ok(()) => state.status = "Tree drawn".to_string(),
            Err(e) => state.show_error("Could not draw tree", e.to_string()),
        },
        Ok(None) => state.status = "Nothing to draw".to_string(),
        Err(e) => state.show_error("Draw failed", e.to_string()),
    }
}
