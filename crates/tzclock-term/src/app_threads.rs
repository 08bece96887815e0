use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use super::app_types::AppMsg;

/// Interval between clock refreshes.
pub(super) const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Spawns the tick thread.
///
/// Runs until the receiving end of the channel is dropped.
pub(super) fn spawn_tick_thread(tx: mpsc::Sender<AppMsg>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        loop {
            thread::sleep(TICK_INTERVAL);
            if tx.send(AppMsg::Tick).is_err() {
                break;
            }
        }
    })
}

/// Forwards each line from `reader` into the channel.
///
/// Sends `InputClosed` once the reader hits end of file or fails.
pub(super) fn spawn_input_reader<R>(reader: R, tx: mpsc::Sender<AppMsg>) -> thread::JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(AppMsg::Input(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(AppMsg::InputClosed);
    })
}
