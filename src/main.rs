use trivia_quiz::QuizApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Trivia Game",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}
