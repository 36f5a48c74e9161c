use robot_builder::models::*;
use robot_builder::{
    AndroidBuilder, AutonomousCarBuilder, Director, FlyingMonkeyBuilder, RobotBuilder, RobotKind,
};
use speculate2::speculate;

fn labels(parts: &[Part]) -> Vec<&'static str> {
    parts.iter().map(Part::label).collect()
}

speculate! {
    before {
        let director = Director::new();
    }

    describe "recipes" {
        it "builds an android" {
            let robot = director.make_robot(&mut AndroidBuilder::new());

            assert_eq!(robot.robot_type(), "ANDROID");
            assert_eq!(labels(robot.traversal()), vec!["two legs", "two arms"]);
            assert_eq!(labels(robot.detection_systems()), vec!["cameras"]);
        }

        it "builds an autonomous car" {
            let robot = director.make_robot(&mut AutonomousCarBuilder::new());

            assert_eq!(robot.robot_type(), "AUTONOMOUS CAR");
            assert_eq!(labels(robot.traversal()), vec!["four wheels"]);
            assert_eq!(labels(robot.detection_systems()), vec!["infrared"]);
        }

        it "builds a flying monkey" {
            let robot = director.make_robot(&mut FlyingMonkeyBuilder::new());

            assert_eq!(robot.robot_type(), "FLYING MONKEY ROBOT");
            assert_eq!(labels(robot.traversal()), vec!["wings", "two arms"]);
            assert_eq!(labels(robot.detection_systems()), vec!["infrared", "cameras"]);
        }

        it "gives every kind's builder its own recipe" {
            let robots = director.make_all(&RobotKind::ALL);
            let types: Vec<_> = robots.iter().map(Robot::robot_type).collect();
            assert_eq!(types, vec!["ANDROID", "AUTONOMOUS CAR", "FLYING MONKEY ROBOT"]);
        }
    }

    describe "build steps" {
        it "duplicates traversal parts when called twice" {
            let mut builder = FlyingMonkeyBuilder::new();
            builder.build_traversal();
            builder.build_traversal();

            let robot = builder.get_product();
            assert_eq!(
                labels(robot.traversal()),
                vec!["wings", "two arms", "wings", "two arms"]
            );
            assert!(robot.detection_systems().is_empty());
        }

        it "duplicates detection parts when called twice" {
            let mut builder = AutonomousCarBuilder::new();
            builder.build_detection_system();
            builder.build_detection_system();

            assert_eq!(
                labels(builder.get_product().detection_systems()),
                vec!["infrared", "infrared"]
            );
        }

        it "starts with a bare robot carrying the type label" {
            let builder = AndroidBuilder::default();
            let robot = builder.get_product();

            assert_eq!(robot.robot_type(), "ANDROID");
            assert!(robot.is_bare());
        }
    }

    describe "reset" {
        it "only reflects work done after the reset" {
            let mut builder = AndroidBuilder::new();
            director.make_robot(&mut builder);

            builder.reset();
            builder.build_detection_system();

            let robot = builder.get_product();
            assert_eq!(robot.robot_type(), "ANDROID");
            assert!(robot.traversal().is_empty());
            assert_eq!(labels(robot.detection_systems()), vec!["cameras"]);
        }

        it "leaves a product that was already handed out untouched" {
            let mut builder = FlyingMonkeyBuilder::new();
            let handed_out = director.make_robot(&mut builder);

            builder.reset();
            builder.build_traversal();

            assert_eq!(handed_out.detection_systems().len(), 2);
            assert_eq!(builder.get_product().detection_systems().len(), 0);
        }
    }
}
