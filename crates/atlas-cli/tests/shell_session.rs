//! End-to-end session tests against the real binary

use assert_cmd::Command;
use predicates::str::contains;

fn atlas() -> Command {
    Command::cargo_bin("atlas").expect("binary builds")
}

#[test]
fn registers_cities_and_roads_then_answers_a_route_query() {
    let session = concat!(
        "2\n1\n",                 // Add -> City
        "1\nTehran\n2\n",         // id, name, back to main menu
        "2\n1\n2\nShiraz\n2\n",   // second city
        "2\n2\n",                 // Add -> Road
        "1\nHighway 65\n1\n2\n\n2\n7200\nfalse\n2\n",
        "4\n1:2\n",               // Path query
        "5\n"                     // Exit
    );

    atlas()
        .write_stdin(session)
        .assert()
        .success()
        .stdout(contains("City with id=1 added!"))
        .stdout(contains("Road with id=1 added!"))
        // 7200 length units at speed 2 is exactly 150 days of travel.
        .stdout(contains(
            "Tehran:Shiraz via Road Highway 65: Takes 150:00:00",
        ));
}

#[test]
fn bidirectional_road_answers_the_reverse_query() {
    let session = concat!(
        "2\n1\n1\nTehran\n2\n",
        "2\n1\n2\nQom\n2\n",
        "2\n2\n1\nLoop Road\n1\n2\n\n100\n50\ntrue\n2\n",
        "4\n2:1\n",
        "5\n"
    );

    atlas()
        .write_stdin(session)
        .assert()
        .success()
        .stdout(contains("Qom:Tehran via Road Loop Road: Takes 00:00:30"));
}

#[test]
fn deleting_a_city_leaves_roads_and_queries_intact() {
    let session = concat!(
        "2\n1\n1\nTehran\n2\n",
        "2\n1\n2\nQom\n2\n",
        "2\n1\n3\nKashan\n2\n",
        "2\n2\n1\nA1\n1\n2\n3\n100\n50\nfalse\n2\n", // road through city 3
        "3\n1\n3\n",                                 // Delete -> City -> id 3
        "4\n1:2\n",                                  // endpoints still resolve
        "5\n"
    );

    atlas()
        .write_stdin(session)
        .assert()
        .success()
        .stdout(contains("City:3 deleted!"))
        .stdout(contains("Tehran:Qom via Road A1: Takes 00:00:30"));
}

#[test]
fn invalid_menu_choice_reports_and_continues() {
    atlas()
        .write_stdin("99\n5\n")
        .assert()
        .success()
        .stdout(contains("Invalid input. Please enter 1 for more info."));
}

#[test]
fn zero_speed_limit_is_rejected_at_creation() {
    let session = concat!(
        "2\n2\n",                              // Add -> Road
        "1\nBroken\n1\n2\n\n0\n50\nfalse\n",   // speed_limit=0 rejected
        "1\nFixed\n1\n2\n\n50\n50\nfalse\n2\n", // flow restarts, valid road
        "5\n"
    );

    atlas()
        .write_stdin(session)
        .assert()
        .success()
        .stdout(contains("Invalid value for speed_limit"))
        .stdout(contains("Road with id=1 added!"));
}
