//! Runs backend calls off the UI thread.
//!
//! Each [`UiCommand::Api`] becomes its own task so overlapping requests do not
//! queue behind each other. Results go back to the UI loop as
//! [`AppEvent::Api`], still carrying the tag of their request.

use crate::rest::ShopApi;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;
use std::sync::mpsc as std_mpsc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub fn spawn_executor(
    handle: &Handle,
    api: ShopApi,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    let spawner = handle.clone();
    handle.spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::Api { tag, request } => {
                    let api = api.clone();
                    let events = events.clone();
                    spawner.spawn(async move {
                        let label = request.label();
                        let response = api.execute(request).await;
                        if events.send(AppEvent::Api { tag, response }).is_err() {
                            tracing::debug!(request = label, "UI gone, dropping response");
                        }
                    });
                }
            }
        }
        tracing::debug!("Command channel closed, executor stopping");
    })
}
