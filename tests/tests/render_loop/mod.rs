//! Render-loop behavior against a live session: zero-sized surfaces, blit
//! faults, resize recovery.

use std::{sync::Arc, time::Duration};

use argus::{
    frame::PixelFormat,
    source::testing::{solid_frame, ConnectStep, ReadStep, ScriptedConnector},
    Player, PlayerConfig,
};
use rstest::rstest;
use url::Url;

use crate::common::{
    fixtures::{camera_url, tracing_setup},
    surface::TestSurface,
    wait_until,
};

const WAIT: Duration = Duration::from_secs(2);

fn config() -> PlayerConfig {
    PlayerConfig::default()
        .with_read_backoff(Duration::from_millis(10))
        .with_tick_interval(Duration::from_millis(5))
}

fn endless_frames() -> Arc<ScriptedConnector> {
    Arc::new(ScriptedConnector::new(vec![ConnectStep::Open(
        (0..200u8)
            .map(|i| ReadStep::Frame(solid_frame(4, 4, i, PixelFormat::Bgr24)))
            .collect(),
    )]))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn zero_sized_surface_skips_drawing_but_keeps_rearming(
    tracing_setup: (),
    camera_url: Url,
) {
    let _ = tracing_setup;
    let connector = endless_frames();
    let surface = TestSurface::new(0, 240);
    let counters = surface.counters();
    let mut player = Player::with_config(Arc::clone(&connector), surface, config());

    player.play(camera_url).await;
    wait_until(WAIT, "frames to start flowing", || {
        connector.probes().first().is_some_and(|p| p.frames_read() > 0)
    })
    .await;

    // Many ticks pass; a zero-width surface must never be drawn onto.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(counters.blits(), 0);
    assert!(player.is_running(), "skipped ticks must keep the loop armed");

    // Once the surface gets a real size the very same loop starts drawing.
    player.surface().lock().width = 320;
    wait_until(WAIT, "a blit after the surface gained a size", || {
        counters.blits() > 0
    })
    .await;

    player.stop().await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blit_faults_are_swallowed_and_recovered(tracing_setup: (), camera_url: Url) {
    let _ = tracing_setup;
    let connector = endless_frames();
    let mut surface = TestSurface::new(64, 48);
    surface.fail_blit = true;
    let counters = surface.counters();
    let mut player = Player::with_config(Arc::clone(&connector), surface, config());

    player.play(camera_url).await;
    wait_until(WAIT, "frames to start flowing", || {
        connector.probes().first().is_some_and(|p| p.frames_read() > 0)
    })
    .await;

    // Every tick fails; the loop and the session must both survive.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(player.is_running());
    assert_eq!(counters.blits(), 0);

    // A healthy surface on the next tick is all it takes.
    player.surface().lock().fail_blit = false;
    wait_until(WAIT, "a blit after faults stop", || counters.blits() > 0).await;

    let drawn = player.surface().lock().last_frame.clone().unwrap();
    assert_eq!(drawn.dimensions(), (64, 48));
    assert_eq!(drawn.format(), PixelFormat::Rgb24);

    player.stop().await;
}
