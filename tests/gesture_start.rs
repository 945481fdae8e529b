use ambient_drone::{
    engine::OfflineEngine,
    gesture::{FirstGesture, GestureKind},
    AmbientSynth, SynthConfig,
};

fn synth(refusals: usize) -> AmbientSynth<OfflineEngine> {
    AmbientSynth::new(
        SynthConfig::default(),
        OfflineEngine::new(48_000.0).refusing(refusals),
    )
}

#[test]
fn gestures_after_start_build_nothing_more() {
    let mut synth = synth(0);
    let mut gestures = FirstGesture::all();

    let first = gestures.notify(GestureKind::Scroll, |_| synth.try_start());
    assert!(matches!(first, Some(Ok(()))));

    for kind in GestureKind::ALL {
        let later = gestures.notify(kind, |_| synth.try_start());
        assert!(later.is_none(), "{kind:?} should no longer be observed");
    }

    assert_eq!(synth.engine().graphs_received(), 1);
}

#[test]
fn refusals_keep_every_source_listening() {
    let mut synth = synth(2);
    let mut gestures = FirstGesture::all();

    let outcomes: Vec<_> = [
        GestureKind::Scroll,
        GestureKind::Click,
        GestureKind::PointerMove,
        GestureKind::Key,
        GestureKind::Touch,
    ]
    .into_iter()
    .map(|kind| {
        gestures
            .notify(kind, |_| synth.try_start())
            .map(|result| result.is_ok())
    })
    .collect();

    assert_eq!(
        outcomes,
        vec![Some(false), Some(false), Some(true), None, None]
    );
    assert!(synth.state().started);
    assert_eq!(synth.engine().graphs_received(), 1);
}

#[test]
fn mute_control_consumes_its_event() {
    let mut synth = synth(1);
    let gestures = FirstGesture::all();

    // The control sees the click first and makes the only start attempt
    let err = synth.toggle_mute().unwrap_err();
    assert!(err.is_playback_unavailable());
    assert_eq!(synth.engine().play_attempts(), 1);
    assert!(gestures.is_armed());

    // Next press on the control starts it
    synth.toggle_mute().unwrap();
    assert!(synth.state().is_audible());
    assert_eq!(synth.engine().play_attempts(), 2);
    assert_eq!(synth.engine().graphs_received(), 1);
}

#[test]
fn configured_subset_ignores_other_kinds() {
    let config = SynthConfig {
        gestures: vec![GestureKind::Click],
        ..SynthConfig::default()
    };
    let mut synth = AmbientSynth::new(config.clone(), OfflineEngine::new(48_000.0));
    let mut gestures = FirstGesture::new(config.gestures.iter().copied());

    assert!(gestures
        .notify(GestureKind::PointerMove, |_| synth.try_start())
        .is_none());
    assert!(!synth.state().started);

    gestures.notify(GestureKind::Click, |_| synth.try_start());
    assert!(synth.state().started);
}
