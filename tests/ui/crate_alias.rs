use std::sync::Arc;

use property_bind as pb;
use pb::prelude::*;

#[derive(PropertyBind)]
#[property_bind(crate = "pb")]
#[property_bind(members, team)]
struct Team {
    members: ObservableVec<Arc<Member>>,
}

#[derive(Default)]
struct Member {
    team: ParentRef<Team>,
}

fn main() {
    let team = Team::new();
    let member = Arc::new(Member::default());
    team.members.push(member.clone());
    assert!(member.team.points_to(&team));
}
