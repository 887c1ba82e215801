use std::io;

use chess_rules::protocol;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    protocol::run(stdin.lock(), stdout.lock())
}
