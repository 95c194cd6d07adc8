//! End-to-end checks through the public API

use pattern_demos::{
    Beverage, ChatRoom, Coffee, DeviceAction, Door, DoorCommand, Event, Invoker, Light,
    LightCommand, PrepStep, ScriptedInput, TempCommand, Thermostat, Transcript, Tv, TvCommand,
    User,
};

#[test]
fn test_undo_restores_every_command_in_reverse() {
    let transcript = Transcript::new();
    let (light, door, temp, tv) = (Light, Door, Thermostat, Tv);
    let mut invoker = Invoker::new(Box::new(transcript.clone()));

    invoker.run(LightCommand::new(&light, true));
    invoker.run(DoorCommand::new(&door, true));
    invoker.run(TempCommand::new(&temp, true));
    invoker.run(TvCommand::new(&tv, true));
    let executed = transcript.take();

    for _ in 0..executed.len() {
        invoker.undo();
    }
    let undone = transcript.take();

    let inverse = |event: &Event| match event {
        Event::Device { action } => Event::Device {
            action: match action {
                DeviceAction::LightOn => DeviceAction::LightOff,
                DeviceAction::DoorOpened => DeviceAction::DoorClosed,
                DeviceAction::TemperatureIncreased => DeviceAction::TemperatureDecreased,
                DeviceAction::TvOn => DeviceAction::TvOff,
                other => panic!("unexpected forward action {:?}", other),
            },
        },
        other => panic!("unexpected event {:?}", other),
    };
    let expected: Vec<Event> = executed.iter().rev().map(inverse).collect();
    assert_eq!(undone, expected);

    invoker.undo();
    assert_eq!(transcript.events(), vec![Event::NothingToUndo]);
}

#[test]
fn test_coffee_condiment_answers() {
    let cases = [
        ("y", true),
        ("Y ", true),
        ("n", false),
        ("", false),
        ("yes", false),
    ];

    for (answer, expect_condiments) in cases {
        let transcript = Transcript::new();
        let mut input = ScriptedInput::new([answer]);

        Coffee.prepare(&mut transcript.clone(), &mut input);

        let added = transcript.events().iter().any(|event| {
            matches!(
                event,
                Event::Preparation {
                    step: PrepStep::AddCondiments,
                    ..
                }
            )
        });
        assert_eq!(added, expect_condiments, "answer {:?}", answer);
    }
}

#[test]
fn test_chat_room_scenario() {
    let transcript = Transcript::new();
    let room = ChatRoom::new(Box::new(transcript.clone()));
    let nika = User::new("Nika", &room);
    let niusha = User::new("Niusha", &room);
    let danel = User::new("Danel", &room);

    nika.join();
    assert!(transcript.is_empty());

    niusha.join();
    danel.join();
    assert_eq!(
        transcript.take().len(),
        3,
        "Nika sees two joins, Niusha sees one"
    );

    nika.send("Hi everyone!");
    assert_eq!(
        transcript.take().iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec![
            "Niusha received from Nika: Hi everyone!",
            "Danel received from Nika: Hi everyone!",
        ]
    );

    niusha.send_private("Hey Nika", "Nika");
    assert_eq!(
        transcript.take(),
        vec![Event::Received {
            to: "Nika".to_string(),
            from: "Niusha".to_string(),
            content: "(private) Hey Nika".to_string(),
        }]
    );

    danel.leave();
    assert_eq!(
        transcript.take().iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec![
            "Nika received from System: Danel left the chat",
            "Niusha received from System: Danel left the chat",
        ]
    );

    danel.send("Still here?");
    assert_eq!(
        transcript.take(),
        vec![Event::NotInChat {
            name: "Danel".to_string()
        }]
    );
    assert_eq!(room.member_names(), vec!["Nika", "Niusha"]);
}
