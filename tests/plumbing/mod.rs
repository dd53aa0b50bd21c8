mod write_tree;
