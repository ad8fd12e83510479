// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::GitError;
use crate::git::ack::acknowledged_ticket;
use crate::git::guard::{blocking_changes, collision_blockers};
use crate::git::patchset::highest_patchset;
use crate::git::pushref::PushParams;
use crate::git::query::LocalBranch;
use crate::git::refs::{
    BranchName, parse_id, patchset_branch, patchset_glob, patchset_ref, ticket_head,
    tracking_branch,
};
use crate::git::remote::select_remote;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

// --- refs ---

#[test]
fn test_patchset_ref_pads_ticket_bucket() {
    assert_eq!(patchset_ref(7, 3), "refs/tickets/07/7/3");
    assert_eq!(patchset_ref(123, 1), "refs/tickets/23/123/1");
    assert_eq!(patchset_ref(100, 2), "refs/tickets/00/100/2");
    assert_eq!(patchset_glob(42), "refs/tickets/42/42/*");
}

#[test]
fn test_branch_and_head_names() {
    assert_eq!(patchset_branch(5, 2), "patchset/5/2");
    assert_eq!(ticket_head(5), "refs/heads/ticket/5");
    assert_eq!(tracking_branch("origin", 5), "origin/ticket/5");
}

#[test]
fn test_parse_id_rejects_signs_and_zero() {
    assert_eq!(parse_id("42"), Some(42));
    assert_eq!(parse_id("+42"), None);
    assert_eq!(parse_id("0"), None);
    assert_eq!(parse_id(""), None);
    assert_eq!(parse_id("auth"), None);
}

#[test]
fn test_classify_branch_names() {
    assert_eq!(BranchName::classify("ticket/5"), BranchName::Ticket(5));
    assert_eq!(BranchName::classify("patchset/5/2"), BranchName::Patchset(5, 2));
    assert_eq!(
        BranchName::classify("topic/auth"),
        BranchName::Topic("auth".to_string())
    );
    assert_eq!(BranchName::classify("topic/12"), BranchName::Topic("12".to_string()));
    assert_eq!(BranchName::classify("ticket/abc"), BranchName::Other);
    assert_eq!(BranchName::classify("patchset/5"), BranchName::Other);
    assert_eq!(BranchName::classify("topic/"), BranchName::Other);
    assert_eq!(BranchName::classify("main"), BranchName::Other);
}

#[test]
fn test_status_header_branch_extraction() {
    let cases = [
        ("## ticket/5...origin/ticket/5 [ahead 1]", Some("ticket/5")),
        ("## patchset/5/2", Some("patchset/5/2")),
        ("## No commits yet on main", Some("main")),
        ("## HEAD (no branch)", None),
        ("M  src/lib.rs", None),
    ];
    for (line, expected) in cases {
        assert_eq!(BranchName::branch_from_status_header(line), expected, "{line}");
    }
    assert_eq!(
        BranchName::from_status_header("## ticket/9...origin/ticket/9"),
        BranchName::Ticket(9)
    );
}

#[test]
fn test_branch_name_accessors() {
    assert_eq!(BranchName::Patchset(5, 2).ticket(), Some(5));
    assert_eq!(BranchName::Topic("7".to_string()).ticket(), None);

    assert_eq!(BranchName::Ticket(5).proposal_ticket(), Some(5));
    assert_eq!(BranchName::Topic("7".to_string()).proposal_ticket(), Some(7));
    assert_eq!(BranchName::Topic("auth".to_string()).proposal_ticket(), None);
    assert_eq!(BranchName::Patchset(5, 2).proposal_ticket(), None);

    assert_eq!(BranchName::Topic("auth".to_string()).topic_name(), Some("auth"));
    assert_eq!(BranchName::Topic("7".to_string()).topic_name(), None);
}

// --- query ---

#[test]
fn test_local_branch_parse_markers() {
    assert_eq!(
        LocalBranch::parse("* ticket/5"),
        Some(LocalBranch {
            name: "ticket/5".to_string(),
            current: true
        })
    );
    assert_eq!(
        LocalBranch::parse("+ patchset/5/1"),
        Some(LocalBranch {
            name: "patchset/5/1".to_string(),
            current: false
        })
    );
    assert_eq!(LocalBranch::parse("* (HEAD detached at 1a2b3c4)"), None);
}

// --- remote ---

#[test]
fn test_select_remote_cases() {
    assert!(matches!(select_remote(&[], None), Err(GitError::NoRemotes)));

    let one = strings(&["origin"]);
    assert_eq!(select_remote(&one, Some("ignored")).unwrap(), "origin");

    let two = strings(&["origin", "upstream"]);
    assert!(matches!(
        select_remote(&two, None),
        Err(GitError::RemoteNotConfigured { remotes }) if remotes == two
    ));
    assert!(matches!(
        select_remote(&two, Some("  ")),
        Err(GitError::RemoteNotConfigured { .. })
    ));
    assert!(matches!(
        select_remote(&two, Some("fork")),
        Err(GitError::RemoteNotFound { remote, .. }) if remote == "fork"
    ));
    assert_eq!(select_remote(&two, Some("upstream")).unwrap(), "upstream");
}

// --- patchset ---

#[test]
fn test_highest_patchset_from_ls_remote() {
    let lines = strings(&[
        "1111111111111111111111111111111111111111\trefs/tickets/05/5/1",
        "3333333333333333333333333333333333333333\trefs/tickets/05/5/10",
        "2222222222222222222222222222222222222222\trefs/tickets/05/5/2",
    ]);
    assert_eq!(highest_patchset(&lines, 5), 10);
    assert_eq!(highest_patchset(&lines, 105), 0);
    assert_eq!(highest_patchset(&[], 5), 0);
}

// --- guard ---

#[test]
fn test_blocking_changes_ignores_untracked() {
    let status = strings(&["?? notes.txt", "M src/lib.rs", "A  new.rs"]);
    assert_eq!(blocking_changes(&status), strings(&["M src/lib.rs", "A  new.rs"]));
    assert!(blocking_changes(&strings(&["?? a", "?? b"])).is_empty());
}

#[test]
fn test_collision_blockers() {
    let existing = strings(&["main", "ticket", "ticket/5", "patchset/5", "topic/auth/old"]);

    assert_eq!(collision_blockers(&existing, "ticket/5", false), strings(&["ticket"]));
    assert_eq!(
        collision_blockers(&existing, "ticket/5", true),
        strings(&["ticket", "ticket/5"])
    );
    assert_eq!(
        collision_blockers(&existing, "patchset/5/2", false),
        strings(&["patchset/5"])
    );
    assert_eq!(
        collision_blockers(&existing, "topic/auth", true),
        strings(&["topic/auth/old"])
    );
    assert!(collision_blockers(&[], "ticket/5", true).is_empty());
    assert!(collision_blockers(&strings(&["tickets"]), "ticket/5", true).is_empty());
}

// --- pushref ---

#[test]
fn test_push_params_suffix() {
    let params = PushParams::builder()
        .milestone("M1".to_string())
        .topic("auth".to_string())
        .cc(strings(&["alice", "bob"]))
        .build();
    insta::assert_snapshot!(params.suffix(&BranchName::Other), @"%m=M1,t=auth,cc=alice,cc=bob");
}

#[test]
fn test_push_params_empty_without_topic_branch() {
    let params = PushParams::default();
    assert_eq!(params.suffix(&BranchName::Other), "");
    assert_eq!(params.suffix(&BranchName::Topic("12".to_string())), "");
}

#[test]
fn test_push_params_topic_from_branch() {
    let params = PushParams::builder().responsible("carol".to_string()).build();
    assert_eq!(
        params.refspec("refs/for/new", &BranchName::Topic("auth".to_string())),
        "HEAD:refs/for/new%t=auth,r=carol"
    );

    let explicit = PushParams::builder().topic("ui".to_string()).build();
    assert_eq!(explicit.suffix(&BranchName::Topic("auth".to_string())), "%t=ui");
}

// --- ack ---

#[test]
fn test_acknowledged_ticket() {
    let lines = strings(&[
        "remote: Processing proposal",
        "remote: --> #17",
        "To /srv/repo.git",
    ]);
    assert_eq!(acknowledged_ticket(&lines).unwrap(), Some(17));
    assert_eq!(
        acknowledged_ticket(&strings(&["remote: ticket 17 created"])).unwrap(),
        None
    );
    assert_eq!(acknowledged_ticket(&strings(&["-->#0"])).unwrap(), None);
}
