//! Access scopes are the natural habitat of key sets: a grant is usually
//! "everything", "nothing", an allowlist, or everything minus a denylist.
//! This demo composes a few grants the way an authorization layer would,
//! without ever enumerating the scope universe.

use keyset::prelude::*;

fn main() {
    // An administrator starts from the full universe of scopes.
    let admin: KeySet<&str> = KeySet::all();

    // Compliance revokes a couple of scopes for everyone.
    let revoked = KeySet::some(["billing.write", "users.delete"]);
    let effective = admin.remove(&revoked);
    println!("effective:   {effective}");

    // A team is granted a finite allowlist; what can its members actually do?
    let team = KeySet::some(["billing.read", "billing.write", "audit.read"]);
    let usable = team.intersect(&effective);
    println!("team usable: {usable}");

    // Membership checks never materialize the universe.
    assert!(effective.contains(&"audit.read"));
    assert!(!effective.contains(&"users.delete"));

    // The complement of a denylist is the allowlist, and vice versa.
    println!("revoked:     {}", effective.invert());
}
