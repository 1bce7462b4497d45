use corral::prelude::*;

fn main() -> anyhow::Result<()> {
    let set: SyncSet<i32> = SyncSet::new();

    set.add_all(&SyncSet::from([1, 2, 3, 4]));
    set.add_all(&SyncSet::from([5, 10, 3, 4]));

    let copy: SyncSet<i32> = SyncSet::copy_of(&set);
    anyhow::ensure!(copy == set, "copy diverged from its origin");

    let mut elements: Vec<i32> = copy.snapshot().collect();
    elements.sort_unstable();
    println!("{:?}", elements);

    let list = SyncList::copy_of(&elements);
    println!("{} / third element: {}", list, list.get(2)?);

    Ok(())
}
