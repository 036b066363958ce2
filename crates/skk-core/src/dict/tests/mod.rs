mod skk_dict;
