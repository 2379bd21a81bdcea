use moon::*;
use shared::{PROFILE, UpMsg};

// ===== CENTRALIZED DEBUG FLAGS =====
const DEBUG_BACKEND: bool = false; // Backend request/response debugging

// Debug macro for easy toggling
macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            println!($($arg)*);
        }
    };
}

async fn frontend() -> Frontend {
    Frontend::new()
        .title(format!("{} | {}", PROFILE.name, PROFILE.title))
}

// The page never sends messages; the handler only exists because moon requires one.
async fn up_msg_handler(req: UpMsgRequest<UpMsg>) {
    debug_log!(DEBUG_BACKEND, "BACKEND: Received request type: {:?}", std::mem::discriminant(&req.up_msg));
    match req.up_msg {}
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    // Set panic hook to log all panics
    std::panic::set_hook(Box::new(|panic_info| {
        println!("BACKEND PANIC: {:?}", panic_info);
    }));

    start(frontend, up_msg_handler, |_error| {}).await
}
