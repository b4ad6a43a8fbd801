mod app_router;
mod audio;
mod celebration;
mod confetti_bridge;
mod evasive_button;
mod input;
mod rng;
mod signature_pad;
mod wheel_view;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<yew_app::App>::new().render();
}
