// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Job, Role};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidJob(String::from("XYZ"));
    assert_eq!(format!("{err}"), "Invalid job: XYZ");

    let err: DomainError = DomainError::InvalidRole(String::from("support"));
    assert_eq!(format!("{err}"), "Invalid role: support");

    let err: DomainError = DomainError::InvalidSlot(String::from("belt"));
    assert_eq!(format!("{err}"), "Invalid slot: belt");

    let err: DomainError = DomainError::InvalidSource(String::from("gacha"));
    assert_eq!(format!("{err}"), "Invalid item source: gacha");

    let err: DomainError = DomainError::InvalidMateriaGrade { grade: 13 };
    assert_eq!(
        format!("{err}"),
        "Invalid materia grade: 13. Must be between 1 and 12"
    );

    let err: DomainError = DomainError::InvalidPriority {
        role: Role::Healer,
        value: -2,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid priority -2 for role 'healer'. Must be non-negative"
    );

    let err: DomainError = DomainError::DuplicateParticipant {
        player: String::from("Alice"),
        job: Job::WAR,
    };
    assert_eq!(format!("{err}"), "Participant 'Alice' appears twice on job WAR");

    let err: DomainError = DomainError::EmptyRoster;
    assert_eq!(
        format!("{err}"),
        "Roster must contain at least one participant"
    );

    let err: DomainError = DomainError::ParticipantNotFound {
        index: 9,
        roster_size: 8,
    };
    assert_eq!(
        format!("{err}"),
        "Participant index 9 out of range for roster of 8"
    );
}
